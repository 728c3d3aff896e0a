use std::path::PathBuf;

use entity_gql_compiler::{CompileOptions, Diagnostics, compile_with_diagnostics};

use super::run_common::load_or_exit;

pub struct CheckArgs {
    pub selector_path: Option<PathBuf>,
    pub selector_text: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let selector = load_or_exit(args.selector_path.as_deref(), args.selector_text.as_deref());
    let (_, diagnostics) = compile_with_diagnostics(&selector, &CompileOptions::new());

    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_colored(args.color));
        eprintln!();
        eprintln!("{}", summary(&diagnostics));
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// One-line tally, e.g. `selector check found 2 warnings`.
pub fn summary(diagnostics: &Diagnostics) -> String {
    let mut parts = Vec::new();
    for (count, noun) in [
        (diagnostics.error_count(), "error"),
        (diagnostics.warning_count(), "warning"),
    ] {
        match count {
            0 => {}
            1 => parts.push(format!("1 {noun}")),
            n => parts.push(format!("{n} {noun}s")),
        }
    }
    format!("selector check found {}", parts.join(" and "))
}
