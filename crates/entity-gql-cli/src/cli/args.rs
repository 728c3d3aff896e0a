//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Selector JSON file (positional, "-" for stdin).
pub fn selector_path_arg() -> Arg {
    Arg::new("selector_path")
        .value_name("SELECTOR")
        .value_parser(value_parser!(PathBuf))
        .help("Selector JSON file (use \"-\" for stdin)")
}

/// Inline selector JSON (-s/--selector).
pub fn selector_text_arg() -> Arg {
    Arg::new("selector_text")
        .short('s')
        .long("selector")
        .value_name("JSON")
        .conflicts_with("selector_path")
        .help("Inline selector JSON")
}

/// Operation name (-n/--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .short('n')
        .long("name")
        .value_name("NAME")
        .required(true)
        .help("Operation name")
}

/// Parameters as a JSON object (--params).
pub fn params_arg() -> Arg {
    Arg::new("params")
        .long("params")
        .value_name("JSON")
        .conflicts_with("raw_params")
        .help("Operation parameters as a JSON object")
}

/// Pre-formed parameter text (--raw-params).
pub fn raw_params_arg() -> Arg {
    Arg::new("raw_params")
        .long("raw-params")
        .value_name("TEXT")
        .help("Parameter text placed verbatim between the parentheses")
}

/// Indentation unit (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("TEXT")
        .help("Indentation unit; enables pretty-printing when non-empty")
}

/// Root-level included fields (--include).
pub fn include_arg() -> Arg {
    Arg::new("include")
        .long("include")
        .value_name("FIELDS")
        .value_delimiter(',')
        .help("Fields always selected at the root (comma-separated)")
}

/// Nesting level of the root (--depth).
pub fn depth_arg() -> Arg {
    Arg::new("depth")
        .long("depth")
        .value_name("N")
        .default_value("0")
        .value_parser(value_parser!(usize))
        .help("Nesting level of the root selection")
}

/// Raw fragments (positional, one or more).
pub fn fragments_arg() -> Arg {
    Arg::new("fragments")
        .value_name("FRAGMENT")
        .num_args(1..)
        .required(true)
        .help("Query fragments, with or without enclosing braces")
}

/// Reject input with omissions (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Fail instead of silently skipping malformed input")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log compiler decisions to stderr (-vv for trace)")
}
