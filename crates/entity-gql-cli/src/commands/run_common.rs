//! Shared exit paths for command handlers.

use std::path::Path;

use entity_gql_compiler::{Diagnostics, Error};
use entity_gql_core::Selector;

use super::selector_loader::load_selector;

/// Load the selector or exit with an error message.
pub fn load_or_exit(selector_path: Option<&Path>, selector_text: Option<&str>) -> Selector {
    load_selector(selector_path, selector_text).unwrap_or_else(|e| fail(e))
}

/// Print the query text, or report the failure and exit.
pub fn emit(result: entity_gql_compiler::Result<String>, color: bool) {
    match result {
        Ok(text) => println!("{}", text),
        Err(Error::Rejected(diagnostics)) => reject(&diagnostics, color),
        Err(e) => fail(e),
    }
}

/// Render diagnostics to stderr and exit.
fn reject(diagnostics: &Diagnostics, color: bool) -> ! {
    eprint!("{}", diagnostics.render_colored(color));
    std::process::exit(1);
}

pub fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    std::process::exit(1);
}
