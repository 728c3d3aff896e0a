//! Diagnostics for input the compiler skipped or could not honour.
//!
//! Compilation never fails on data shape: malformed relationships and
//! arguments are omitted from the output. Every omission is recorded here so
//! that a strict [`Policy`] can reject the input instead.

mod message;
mod printer;

#[cfg(test)]
mod tests;

pub use message::{Diagnostic, DiagnosticKind, Severity};
pub use printer::DiagnosticsPrinter;

use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: Diagnostic,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind at a selector or argument path.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to add detail.
    pub fn report(&mut self, kind: DiagnosticKind, path: impl Into<String>) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: Diagnostic::with_default_message(kind, path.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter()
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }

    pub fn render(&self) -> String {
        self.printer().render()
    }

    pub fn render_colored(&self, colored: bool) -> String {
        self.printer().colored(colored).render()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}

/// What to do with input that produced diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Policy {
    /// Omit what cannot be rendered and return the text anyway.
    #[default]
    Lenient,
    /// Reject the input if anything was omitted or looks unbalanced.
    Strict,
}

impl Policy {
    pub fn rejects(self, diagnostics: &Diagnostics) -> bool {
        self == Policy::Strict && !diagnostics.is_empty()
    }

    /// Pass `value` through unless the diagnostics are rejected.
    pub fn check<T>(self, value: T, diagnostics: Diagnostics) -> Result<T> {
        if self.rejects(&diagnostics) {
            return Err(Error::Rejected(diagnostics));
        }
        Ok(value)
    }
}
