pub mod ast;
pub mod check;
pub mod fix;
pub mod input;

#[cfg(test)]
mod tests;

use std::path::Path;

use recstyle_lib::{Linter, Style};

use input::resolve_config;

/// Resolves the configuration against the working directory, exiting on error.
fn linter_for(config: Option<&Path>, style: Option<Style>) -> Linter {
    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    match resolve_config(config, style, &cwd) {
        Ok(config) => Linter::new(&config),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
