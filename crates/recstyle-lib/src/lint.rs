//! Lint and fix entry points.

use tracing::debug;

use crate::Result;
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::fix::apply_fixes;
use crate::parser::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_FUEL, parse_with_fuel};
use crate::rule::{self, Style};
use crate::semantic::bind;

/// Upper bound on lint-and-apply rounds in [`Linter::fix`].
pub const MAX_FIX_PASSES: usize = 10;

#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Diagnostics,
    /// Whether the style check was skipped because the source has syntax errors.
    pub has_syntax_errors: bool,
    pub exec_fuel_consumed: u32,
}

#[derive(Debug)]
pub struct FixResult {
    pub output: String,
    /// Rounds in which at least one fix was applied.
    pub passes: usize,
    /// Diagnostics of the final text.
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct Linter {
    style: Style,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
}

impl Linter {
    pub fn new(config: &Config) -> Self {
        Self {
            style: config.style,
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// `None` = unlimited.
    pub fn with_exec_fuel(mut self, fuel: Option<u32>) -> Self {
        self.exec_fuel = fuel;
        self
    }

    /// `None` = unlimited.
    pub fn with_recursion_fuel(mut self, fuel: Option<u32>) -> Self {
        self.recursion_fuel = fuel;
        self
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Parses `source` and reports every construct in the non-preferred style.
    ///
    /// Sources with syntax errors only get their (filtered) syntax diagnostics.
    pub fn lint(&self, source: &str) -> Result<LintResult> {
        let parsed = parse_with_fuel(source, self.exec_fuel, self.recursion_fuel)?;

        if parsed.diagnostics.has_errors() {
            debug!(
                errors = parsed.diagnostics.error_count(),
                "syntax errors, style check skipped"
            );
            return Ok(LintResult {
                diagnostics: parsed.diagnostics.filtered(),
                has_syntax_errors: true,
                exec_fuel_consumed: parsed.exec_fuel_consumed,
            });
        }

        let model = bind(&parsed.root);
        let diagnostics = rule::check(&parsed.root, &model, self.style);
        debug!(style = %self.style, findings = diagnostics.warning_count(), "checked source");

        Ok(LintResult {
            diagnostics,
            has_syntax_errors: false,
            exec_fuel_consumed: parsed.exec_fuel_consumed,
        })
    }

    /// Lints and applies fixes until none apply or [`MAX_FIX_PASSES`] is reached.
    pub fn fix(&self, source: &str) -> Result<FixResult> {
        let mut output = source.to_string();
        let mut passes = 0;

        loop {
            let result = self.lint(&output)?;
            if passes == MAX_FIX_PASSES {
                return Ok(FixResult {
                    output,
                    passes,
                    diagnostics: result.diagnostics,
                });
            }

            let (fixed, applied) = apply_fixes(&output, result.diagnostics.fixes());
            if applied == 0 {
                return Ok(FixResult {
                    output,
                    passes,
                    diagnostics: result.diagnostics,
                });
            }

            debug!(pass = passes + 1, applied, "applied fixes");
            output = fixed;
            passes += 1;
        }
    }
}
