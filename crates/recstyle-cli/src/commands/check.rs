//! Report indexed object types written in the non-preferred style.

use std::path::PathBuf;

use recstyle_lib::{Linter, Style};

use super::input::{Input, load_inputs};
use super::linter_for;

pub struct CheckArgs {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub style: Option<Style>,
    pub config: Option<PathBuf>,
    pub color: bool,
}

/// Outcome of checking a batch of inputs.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Rendered diagnostics, one block per diagnostic.
    pub output: String,
    /// Style findings.
    pub findings: usize,
    pub syntax_errors: usize,
    /// Inputs that could not be checked at all.
    pub failures: usize,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.findings == 0 && self.syntax_errors == 0 && self.failures == 0
    }
}

pub fn run(args: CheckArgs) {
    let linter = linter_for(args.config.as_deref(), args.style);

    let inputs = match load_inputs(&args.paths, args.source_text.as_deref()) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let report = check_inputs(&linter, &inputs, args.color);
    if !report.output.is_empty() {
        eprintln!("{}", report.output);
    }

    // Silent on success (like cargo check)
    if !report.is_clean() {
        std::process::exit(1);
    }
}

pub fn check_inputs(linter: &Linter, inputs: &[Input], color: bool) -> CheckReport {
    let mut report = CheckReport::default();

    for input in inputs {
        let name = input.name();
        let result = match linter.lint(&input.text) {
            Ok(result) => result,
            Err(e) => {
                push_block(&mut report.output, &format!("error: {}: {}", name, e));
                report.failures += 1;
                continue;
            }
        };

        if result.diagnostics.is_empty() {
            continue;
        }
        report.findings += result.diagnostics.warning_count();
        report.syntax_errors += result.diagnostics.error_count();
        let rendered = result
            .diagnostics
            .printer()
            .source(&input.text)
            .path(&name)
            .colored(color)
            .render();
        push_block(&mut report.output, &rendered);
    }

    report
}

pub(super) fn push_block(out: &mut String, block: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(block);
}
