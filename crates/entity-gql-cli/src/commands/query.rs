use std::path::PathBuf;

use entity_gql_compiler::{Policy, QueryBuilder};
use entity_gql_core::Value;

use super::run_common::{emit, fail, load_or_exit};

pub struct QueryArgs {
    pub selector_path: Option<PathBuf>,
    pub selector_text: Option<String>,
    pub name: String,
    pub params: Option<String>,
    pub raw_params: Option<String>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: QueryArgs) {
    if args.name.is_empty() {
        fail("operation name cannot be empty");
    }

    let selector = load_or_exit(args.selector_path.as_deref(), args.selector_text.as_deref());
    let policy = if args.strict {
        Policy::Strict
    } else {
        Policy::Lenient
    };

    let mut builder = QueryBuilder::new(&args.name, &selector).policy(policy);
    if let Some(json) = &args.params {
        let value: serde_json::Value = serde_json::from_str(json)
            .unwrap_or_else(|e| fail(format!("invalid --params JSON: {}", e)));
        builder = builder.params(Value::from(value));
    } else if let Some(raw) = &args.raw_params {
        builder = builder.raw_params(raw.as_str());
    }

    emit(builder.build(), args.color);
}
