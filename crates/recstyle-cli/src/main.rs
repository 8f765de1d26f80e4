mod cli;
mod commands;
mod logging;

use cli::{AstParams, CheckParams, FixParams, build_cli};

fn main() {
    logging::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("fix", m)) => {
            let params = FixParams::from_matches(m);
            commands::fix::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
