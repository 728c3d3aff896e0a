use std::path::PathBuf;

use entity_gql_compiler::{CompileOptions, Policy, compile_with_diagnostics};

use super::run_common::{emit, load_or_exit};

pub struct SelectArgs {
    pub selector_path: Option<PathBuf>,
    pub selector_text: Option<String>,
    pub indent: String,
    pub include: Vec<String>,
    pub depth: usize,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: SelectArgs) {
    let selector = load_or_exit(args.selector_path.as_deref(), args.selector_text.as_deref());
    let options = CompileOptions::new()
        .include(args.include)
        .indent(args.indent)
        .depth(args.depth);

    let (text, diagnostics) = compile_with_diagnostics(&selector, &options);
    let policy = if args.strict {
        Policy::Strict
    } else {
        Policy::Lenient
    };

    // Selection bodies already end with a newline when non-empty.
    emit(
        policy.check(text.trim_end_matches('\n').to_string(), diagnostics),
        args.color,
    );
}
