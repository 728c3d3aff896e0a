//! Recursive selector walk.

use std::collections::HashSet;

use entity_gql_core::{Relationship, Selector};

use super::CompileOptions;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Path of the root selector in diagnostics.
const ROOT_PATH: &str = "$";

/// Compile a selector into a selection-set body.
pub fn compile(selector: &Selector, options: &CompileOptions) -> String {
    let mut diagnostics = Diagnostics::new();
    compile_into(selector, options, &mut diagnostics)
}

/// Compile a selector, also returning what was omitted along the way.
///
/// The text is identical to what [`compile`] returns.
pub fn compile_with_diagnostics(
    selector: &Selector,
    options: &CompileOptions,
) -> (String, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let text = compile_into(selector, options, &mut diagnostics);
    (text, diagnostics)
}

pub(crate) fn compile_into(
    selector: &Selector,
    options: &CompileOptions,
    diagnostics: &mut Diagnostics,
) -> String {
    let include: Vec<&str> = options.include.iter().map(String::as_str).collect();
    let mut compiler = SelectionCompiler {
        options,
        diagnostics,
    };
    compiler.compile_level(selector, &include, options.depth, ROOT_PATH)
}

struct SelectionCompiler<'o, 'd> {
    options: &'o CompileOptions,
    diagnostics: &'d mut Diagnostics,
}

impl SelectionCompiler<'_, '_> {
    fn compile_level<'s>(
        &mut self,
        selector: &'s Selector,
        include: &[&'s str],
        depth: usize,
        path: &str,
    ) -> String {
        let prefix = self.options.prefix(depth);
        let mut out = String::new();
        let mut emitted: HashSet<&'s str> = HashSet::new();

        for (i, relationship) in selector.relationships.iter().enumerate() {
            let rel_path = format!("{path}.relationships[{i}]");
            let Some((key_id, key_value)) = self.keys_of(relationship, &rel_path) else {
                continue;
            };

            if emitted.contains(key_value) {
                tracing::debug!(path = %rel_path, field = key_value, "duplicate relationship field");
                self.diagnostics
                    .report(DiagnosticKind::DuplicateField, rel_path)
                    .message(key_value)
                    .emit();
                continue;
            }

            let nested_include: &[&'s str] = if relationship.kind.is_containment() {
                std::slice::from_ref(&key_id)
            } else {
                if emitted.insert(key_id) {
                    self.push_line(&mut out, &prefix, key_id);
                }
                &[]
            };
            emitted.insert(key_value);

            let nested = self.compile_level(
                &relationship.selector,
                nested_include,
                depth + 1,
                &rel_path,
            );
            self.push_block(&mut out, &prefix, key_value, &nested);
        }

        let requested = selector.fields.iter().map(String::as_str);
        for name in include.iter().copied().chain(requested) {
            if emitted.insert(name) {
                self.push_line(&mut out, &prefix, name);
            }
        }

        out
    }

    /// Both keys of a relationship, or `None` (reported) if it cannot be compiled.
    fn keys_of<'s>(
        &mut self,
        relationship: &'s Relationship,
        path: &str,
    ) -> Option<(&'s str, &'s str)> {
        if let Some(keys) = relationship.keys() {
            return Some(keys);
        }

        tracing::debug!(path, "skipping relationship without keys");
        if relationship.key_id.is_none() {
            self.diagnostics
                .report(DiagnosticKind::MissingKeyId, path)
                .emit();
        }
        if relationship.key_value.is_none() {
            self.diagnostics
                .report(DiagnosticKind::MissingKeyValue, path)
                .emit();
        }
        None
    }

    fn push_line(&self, out: &mut String, prefix: &str, name: &str) {
        out.push_str(prefix);
        out.push_str(name);
        out.push('\n');
    }

    /// `<prefix><name> {` newline, the nested body, then `<prefix>}`.
    /// The closing brace ends its line only when pretty-printing.
    fn push_block(&self, out: &mut String, prefix: &str, name: &str, nested: &str) {
        out.push_str(prefix);
        out.push_str(name);
        out.push_str(" {\n");
        out.push_str(nested);
        out.push_str(prefix);
        out.push('}');
        if self.options.is_pretty() {
            out.push('\n');
        }
    }
}
