//! Selection-set compilation from entity-relationship selectors.
//!
//! Walks a [`Selector`](entity_gql_core::Selector) depth-first and emits the
//! body of a GraphQL selection set: no outer braces, no operation name.
//!
//! Per level, fields are emitted in this order:
//! - relationship fields, in relationship order, each with its nested block
//! - implicitly included fields (the parent's `keyId` for containment)
//! - requested fields (`meta.gqlFields`)
//!
//! A name is emitted at most once per level.

mod compiler;
mod options;

#[cfg(test)]
mod compiler_tests;

pub use compiler::{compile, compile_with_diagnostics};
pub use options::CompileOptions;

pub(crate) use compiler::compile_into;
