//! Final query text.

use entity_gql_core::Selector;

use super::{Parameters, QueryRequest};
use crate::Result;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::selection::{CompileOptions, compile_into};

/// Nesting level of the selection set inside `{ name { ... } }`.
const SELECTION_DEPTH: usize = 2;

/// Render a classified request.
pub fn render(request: &QueryRequest<'_>) -> Result<String> {
    let mut diagnostics = Diagnostics::new();
    render_into(request, &mut diagnostics)
}

pub(crate) fn render_into(
    request: &QueryRequest<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<String> {
    match request {
        QueryRequest::FragmentList(fragments) => Ok(render_fragments(fragments, diagnostics)),
        QueryRequest::NamedWithParams {
            name,
            params,
            selector,
        } => render_named(name, Some(params), selector, diagnostics),
        QueryRequest::NamedNoParams { name, selector } => {
            render_named(name, None, selector, diagnostics)
        }
    }
}

/// `{\n<name><params> {\n<selection>}\n}`
fn render_named(
    name: &str,
    params: Option<&Parameters>,
    selector: &Selector,
    diagnostics: &mut Diagnostics,
) -> Result<String> {
    let segment = match params {
        Some(params) => params.segment()?,
        None => String::new(),
    };

    // Compact on purpose: the selection is never pretty-printed here.
    let options = CompileOptions::new().depth(SELECTION_DEPTH);
    let selection = compile_into(selector, &options, diagnostics);

    Ok(format!("{{\n{name}{segment} {{\n{selection}}}\n}}"))
}

fn render_fragments(fragments: &[&str], diagnostics: &mut Diagnostics) -> String {
    let parts: Vec<&str> = fragments
        .iter()
        .enumerate()
        .map(|(i, fragment)| {
            if let Some(brace) = unmatched_brace(fragment) {
                diagnostics
                    .report(DiagnosticKind::UnbalancedBraces, format!("fragments[{i}]"))
                    .hint(format!("unmatched `{brace}`"))
                    .emit();
            }
            strip_outer_braces(fragment)
        })
        .collect();

    format!("{{{}}}", parts.join("\n"))
}

/// Trim a fragment and remove one enclosing `{ }` pair, if present.
pub fn strip_outer_braces(fragment: &str) -> &str {
    let trimmed = fragment.trim();
    trimmed
        .strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
        .unwrap_or(trimmed)
        .trim()
}

/// A brace left without a partner, if any.
fn unmatched_brace(text: &str) -> Option<char> {
    let mut depth: usize = 0;
    for c in text.chars() {
        match c {
            '{' => depth += 1,
            '}' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return Some('}'),
            },
            _ => {}
        }
    }
    (depth > 0).then_some('{')
}
