//! Query assembly: the public entry point.
//!
//! A call is a list of [`QueryArg`]s. [`classify`] turns it into one
//! unambiguous [`QueryRequest`]:
//! - `FragmentList` - raw fragments, outer braces stripped and re-wrapped once
//! - `NamedWithParams` - `(name, params, selector)`
//! - `NamedNoParams` - `(name, selector)`
//!
//! [`render`] then produces the final text. Call shapes that match neither
//! named form fall through to fragments.

mod args;
mod assembler;
mod builder;
mod classify;
mod params;
mod render;

#[cfg(test)]
mod render_tests;

pub use args::QueryArg;
pub use assembler::Assembler;
pub use builder::QueryBuilder;
pub use classify::{QueryRequest, classify, classify_with_diagnostics};
pub use params::Parameters;
pub use render::{render, strip_outer_braces};
