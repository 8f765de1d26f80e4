//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("recstyle")
        .about("Keep TypeScript indexed object types consistent: index signatures or Record")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(fix_command())
        .subcommand(ast_command())
}

/// Report constructs written in the non-preferred style.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Report indexed object types written in the non-preferred style")
        .override_usage(
            "\
  recstyle check [PATH]...
  recstyle check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  recstyle check src/                                   # every TypeScript file under src/
  recstyle check types.ts --style index-signature       # prefer { [key: K]: V }
  recstyle check -s 'interface D { [k: string]: 1 }'    # inline source
  recstyle check src/ --config ci/recstyle.json         # explicit configuration"#,
        )
        .arg(paths_arg())
        .arg(source_text_arg())
        .arg(style_arg())
        .arg(config_arg())
        .arg(color_arg())
}

/// Apply the suggested rewrites.
pub fn fix_command() -> Command {
    Command::new("fix")
        .about("Rewrite indexed object types into the preferred style")
        .override_usage(
            "\
  recstyle fix <FILE>
  recstyle fix --write [PATH]...
  recstyle fix -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  recstyle fix types.ts                                 # print the fixed file
  recstyle fix --write src/                             # rewrite files in place
  recstyle fix -s 'type T = Record<string, 1>;' --style index-signature"#,
        )
        .arg(paths_arg())
        .arg(source_text_arg())
        .arg(style_arg())
        .arg(config_arg())
        .arg(write_arg())
        .arg(color_arg())
}

/// Show the concrete syntax tree of a source file.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a TypeScript source")
        .override_usage(
            "\
  recstyle ast <PATH>
  recstyle ast -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  recstyle ast types.ts                     # syntax tree
  recstyle ast types.ts --raw --spans       # with trivia and positions
  recstyle ast -s 'type T = { [k: string]: 1 };'"#,
        )
        .arg(path_arg())
        .arg(source_text_arg())
        .arg(raw_arg())
        .arg(spans_arg())
        .arg(color_arg())
}
