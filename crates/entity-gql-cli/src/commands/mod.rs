pub mod check;
pub mod fragments;
pub mod query;
pub mod run_common;
pub mod select;
pub mod selector_loader;
