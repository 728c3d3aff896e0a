use entity_gql_compiler::{Assembler, QueryArg};

use super::run_common::emit;

pub struct FragmentsArgs {
    pub fragments: Vec<String>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: FragmentsArgs) {
    let call: Vec<QueryArg<'_>> = args
        .fragments
        .iter()
        .map(|f| QueryArg::Text(f.as_str()))
        .collect();

    emit(Assembler::new().strict(args.strict).assemble(&call), args.color);
}
