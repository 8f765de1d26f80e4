//! recstyle: keep TypeScript indexed object types in one style.
//!
//! `{ [key: string]: V }`, `{ [K in Keys]: V }` and `Record<K, V>` describe
//! the same thing. The linter reports whichever form the configured style
//! does not prefer and offers rewrites that keep the meaning.
//!
//! # Example
//!
//! ```
//! use recstyle_lib::{Config, Linter};
//!
//! let linter = Linter::new(&Config::default());
//! let fixed = linter.fix("interface Dict { [key: string]: number }").unwrap();
//! assert_eq!(fixed.output, "type Dict = Record<string, number>;");
//! assert!(fixed.diagnostics.is_empty());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diagnostics;
pub mod fix;
pub mod lint;
pub mod parser;
pub mod rule;
pub mod semantic;

pub use config::Config;
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use lint::{FixResult, LintResult, Linter};
pub use rule::Style;

/// Errors that stop a file from being checked.
///
/// Style findings and syntax errors are not errors; they are reported as
/// [`Diagnostics`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("unknown style `{0}`, expected `record` or `index-signature`")]
    UnknownStyle(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
