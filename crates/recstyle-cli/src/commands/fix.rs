//! Rewrite indexed object types into the preferred style.

use std::fs;
use std::io;
use std::path::PathBuf;

use recstyle_lib::{FixResult, Linter, Style};
use thiserror::Error;

use super::input::{Input, load_inputs};
use super::linter_for;

pub struct FixArgs {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub style: Option<Style>,
    pub config: Option<PathBuf>,
    pub write: bool,
    pub color: bool,
}

#[derive(Debug, Error)]
pub enum FixError {
    #[error("{name}: {source}")]
    Lint {
        name: String,
        source: recstyle_lib::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub fn run(args: FixArgs) {
    let linter = linter_for(args.config.as_deref(), args.style);

    let inputs = match load_inputs(&args.paths, args.source_text.as_deref()) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(msg) = validate(&inputs, args.write) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }

    let mut failed = false;
    for input in &inputs {
        let result = match fix_input(&linter, input, args.write) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("error: {}", e);
                failed = true;
                continue;
            }
        };

        if !args.write {
            print!("{}", result.output);
        }

        if !result.diagnostics.is_empty() {
            let name = input.name();
            let rendered = result
                .diagnostics
                .printer()
                .source(&result.output)
                .path(&name)
                .colored(args.color)
                .render();
            eprintln!("{}", rendered);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Printing only makes sense for one input, writing only for files.
pub fn validate(inputs: &[Input], write: bool) -> Result<(), &'static str> {
    if write {
        if inputs.iter().any(|input| input.path.is_none()) {
            return Err("--write needs files; inline source can only be printed");
        }
        return Ok(());
    }
    if inputs.len() > 1 {
        return Err("several inputs: pass --write to rewrite them in place");
    }
    Ok(())
}

/// Fixes one input; with `write`, saves the result when anything changed.
pub fn fix_input(linter: &Linter, input: &Input, write: bool) -> Result<FixResult, FixError> {
    let result = linter.fix(&input.text).map_err(|source| FixError::Lint {
        name: input.name(),
        source,
    })?;

    if write
        && result.passes > 0
        && let Some(path) = &input.path
    {
        fs::write(path, &result.output).map_err(|source| FixError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), passes = result.passes, "rewrote file");
    }

    Ok(result)
}
