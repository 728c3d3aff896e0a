//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep the raw `ColorChoice`, so
//! terminal detection happens only at the `Into<*Args>` boundary.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::fragments::FragmentsArgs;
use crate::commands::query::QueryArgs;
use crate::commands::select::SelectArgs;

pub struct QueryParams {
    pub selector_path: Option<PathBuf>,
    pub selector_text: Option<String>,
    pub name: String,
    pub params: Option<String>,
    pub raw_params: Option<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl QueryParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            selector_path: m.get_one::<PathBuf>("selector_path").cloned(),
            selector_text: m.get_one::<String>("selector_text").cloned(),
            name: m.get_one::<String>("name").cloned().unwrap_or_default(),
            params: m.get_one::<String>("params").cloned(),
            raw_params: m.get_one::<String>("raw_params").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<QueryParams> for QueryArgs {
    fn from(p: QueryParams) -> Self {
        Self {
            selector_path: p.selector_path,
            selector_text: p.selector_text,
            name: p.name,
            params: p.params,
            raw_params: p.raw_params,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct SelectParams {
    pub selector_path: Option<PathBuf>,
    pub selector_text: Option<String>,
    pub indent: String,
    pub include: Vec<String>,
    pub depth: usize,
    pub strict: bool,
    pub color: ColorChoice,
}

impl SelectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            selector_path: m.get_one::<PathBuf>("selector_path").cloned(),
            selector_text: m.get_one::<String>("selector_text").cloned(),
            indent: m.get_one::<String>("indent").cloned().unwrap_or_default(),
            include: m
                .get_many::<String>("include")
                .map(|vals| vals.filter(|v| !v.is_empty()).cloned().collect())
                .unwrap_or_default(),
            depth: m.get_one::<usize>("depth").copied().unwrap_or(0),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<SelectParams> for SelectArgs {
    fn from(p: SelectParams) -> Self {
        Self {
            selector_path: p.selector_path,
            selector_text: p.selector_text,
            indent: p.indent,
            include: p.include,
            depth: p.depth,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FragmentsParams {
    pub fragments: Vec<String>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl FragmentsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            fragments: m
                .get_many::<String>("fragments")
                .map(|vals| vals.cloned().collect())
                .unwrap_or_default(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<FragmentsParams> for FragmentsArgs {
    fn from(p: FragmentsParams) -> Self {
        Self {
            fragments: p.fragments,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub selector_path: Option<PathBuf>,
    pub selector_text: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            selector_path: m.get_one::<PathBuf>("selector_path").cloned(),
            selector_text: m.get_one::<String>("selector_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            selector_path: p.selector_path,
            selector_text: p.selector_text,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
