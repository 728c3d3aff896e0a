//! entity-gql compiler: selectors in, GraphQL text out.
//!
//! This crate provides the two layers of query generation:
//! - `selection` - recursive selector walk producing a selection-set body
//! - `operation` - call-shape classification and final query rendering
//! - `diagnostics` - what was omitted, for strict callers
//!
//! ```
//! use entity_gql_compiler::to_graphql;
//!
//! let query = to_graphql!("{ a }", "{ b }").unwrap();
//! assert_eq!(query, "{a\nb}");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod operation;
pub mod selection;

/// Result type for passes that produce both output and diagnostics.
///
/// Diagnostics never fail a pass on their own; only encoding errors use the
/// outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Policy, Severity};
pub use operation::{Assembler, Parameters, QueryArg, QueryBuilder, QueryRequest};
pub use selection::{CompileOptions, compile, compile_with_diagnostics};

/// Errors that can occur while producing query text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Strict policy refused input that had omissions.
    #[error("query rejected with {} diagnostics", .0.len())]
    Rejected(Diagnostics),

    /// A parameter value could not be encoded.
    #[error("failed to encode parameter value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classify and render a query call with the lenient policy.
///
/// See [`to_graphql!`] for the variadic form.
pub fn to_graphql(args: &[QueryArg<'_>]) -> Result<String> {
    Assembler::new().assemble(args)
}

/// Variadic query entry point.
///
/// Each argument is converted with [`QueryArg::from`]: text as `&str`,
/// parameters as [`Value`](entity_gql_core::Value) or `serde_json::Value`,
/// selectors as `&Selector`.
///
/// - `to_graphql!("{ a }", "{ b }")` joins fragments
/// - `to_graphql!("getUser", &selector)` renders a named operation
/// - `to_graphql!("getUser", params, &selector)` adds parameters
#[macro_export]
macro_rules! to_graphql {
    ($($arg:expr),* $(,)?) => {
        $crate::to_graphql(&[$($crate::QueryArg::from($arg)),*])
    };
}
