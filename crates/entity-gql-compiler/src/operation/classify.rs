//! Call-shape classification.

use entity_gql_core::Selector;

use super::{Parameters, QueryArg};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// A query call with its shape resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryRequest<'a> {
    FragmentList(Vec<&'a str>),
    NamedWithParams {
        name: &'a str,
        params: Parameters,
        selector: &'a Selector,
    },
    NamedNoParams {
        name: &'a str,
        selector: &'a Selector,
    },
}

/// Resolve the shape of a query call.
///
/// Named mode is chosen when there are at least two arguments and the second
/// is not text. If a third, non-text argument follows, the arguments are
/// `(name, params, selector)`, otherwise `(name, selector)`. Everything else
/// is a fragment list, with non-text arguments dropped.
pub fn classify<'a>(args: &[QueryArg<'a>]) -> QueryRequest<'a> {
    let mut diagnostics = Diagnostics::new();
    classify_into(args, &mut diagnostics)
}

/// Like [`classify`], also returning dropped arguments and shape mismatches.
pub fn classify_with_diagnostics<'a>(args: &[QueryArg<'a>]) -> (QueryRequest<'a>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let request = classify_into(args, &mut diagnostics);
    (request, diagnostics)
}

pub(crate) fn classify_into<'a>(
    args: &[QueryArg<'a>],
    diagnostics: &mut Diagnostics,
) -> QueryRequest<'a> {
    if args.len() >= 2 && !args[1].is_text() {
        if let Some((request, used)) = classify_named(args) {
            tracing::trace!(args = args.len(), used, "classified as named operation");
            report_ignored(&args[used..], used, diagnostics);
            return request;
        }

        let shape: Vec<&str> = args.iter().map(QueryArg::describe).collect();
        tracing::debug!(shape = ?shape, "unrecognized call shape, rendering fragments");
        diagnostics
            .report(DiagnosticKind::UnrecognizedCallShape, "args")
            .message(format!("({})", shape.join(", ")))
            .emit();
    }

    let mut fragments = Vec::with_capacity(args.len());
    for (i, arg) in args.iter().enumerate() {
        match arg.as_text() {
            Some(text) => fragments.push(text),
            None => report_ignored(std::slice::from_ref(arg), i, diagnostics),
        }
    }
    QueryRequest::FragmentList(fragments)
}

/// Named request and the number of arguments it consumed.
fn classify_named<'a>(args: &[QueryArg<'a>]) -> Option<(QueryRequest<'a>, usize)> {
    let name = args[0].as_text()?;

    match args.get(2) {
        Some(third) if !third.is_text() && !third.is_absent() => {
            let selector = third.as_selector()?;
            let params = match &args[1] {
                QueryArg::Value(value) => Parameters::from_value(value.clone()),
                _ => return None,
            };
            Some((
                QueryRequest::NamedWithParams {
                    name,
                    params,
                    selector,
                },
                3,
            ))
        }
        _ => {
            let selector = args[1].as_selector()?;
            Some((QueryRequest::NamedNoParams { name, selector }, 2))
        }
    }
}

fn report_ignored(args: &[QueryArg<'_>], offset: usize, diagnostics: &mut Diagnostics) {
    for (i, arg) in args.iter().enumerate() {
        diagnostics
            .report(DiagnosticKind::IgnoredArgument, format!("args[{}]", offset + i))
            .message(arg.describe())
            .emit();
    }
}
