//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror command `*Args` but keep the raw color choice;
//! the `From` impls resolve it against the terminal.

use std::path::PathBuf;

use clap::ArgMatches;
use recstyle_lib::Style;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::fix::FixArgs;

pub struct CheckParams {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub style: Option<Style>,
    pub config: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            paths: parse_paths(m),
            source_text: m.get_one::<String>("source_text").cloned(),
            style: m.get_one::<Style>("style").copied(),
            config: m.get_one::<PathBuf>("config").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            paths: p.paths,
            source_text: p.source_text,
            style: p.style,
            config: p.config,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FixParams {
    pub paths: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub style: Option<Style>,
    pub config: Option<PathBuf>,
    pub write: bool,
    pub color: ColorChoice,
}

impl FixParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            paths: parse_paths(m),
            source_text: m.get_one::<String>("source_text").cloned(),
            style: m.get_one::<Style>("style").copied(),
            config: m.get_one::<PathBuf>("config").cloned(),
            write: m.get_flag("write"),
            color: parse_color(m),
        }
    }
}

impl From<FixParams> for FixArgs {
    fn from(p: FixParams) -> Self {
        Self {
            paths: p.paths,
            source_text: p.source_text,
            style: p.style,
            config: p.config,
            write: p.write,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m.get_one::<PathBuf>("path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            raw: m.get_flag("raw"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            path: p.path,
            source_text: p.source_text,
            raw: p.raw,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_paths(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
