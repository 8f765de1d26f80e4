//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Arg, ArgAction, value_parser};
use recstyle_lib::Style;

/// Files or directories to lint (positional, repeatable).
pub fn paths_arg() -> Arg {
    Arg::new("paths")
        .value_name("PATH")
        .num_args(0..)
        .value_parser(value_parser!(PathBuf))
        .help("TypeScript files or directories (searched for .ts, .tsx, .mts, .cts)")
}

/// Single source file (positional).
pub fn path_arg() -> Arg {
    Arg::new("path")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("TypeScript file to parse")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline source text")
}

/// Preferred style (--style), overrides the configuration file.
pub fn style_arg() -> Arg {
    Arg::new("style")
        .long("style")
        .value_name("STYLE")
        .value_parser(
            PossibleValuesParser::new(["record", "index-signature"])
                .try_map(|s| s.parse::<Style>()),
        )
        .help("Preferred indexed object style [default: record]")
}

/// Configuration file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Configuration file (defaults to ./recstyle.json when present)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Rewrite files in place (--write).
pub fn write_arg() -> Arg {
    Arg::new("write")
        .short('w')
        .long("write")
        .action(ArgAction::SetTrue)
        .help("Rewrite files in place instead of printing the result")
}

/// Include trivia tokens (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Include whitespace and comments")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}
