//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use entity_gql_core::Colors;

use super::{Diagnostics, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colors: Colors,
    hints: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colors: Colors::OFF,
            hints: true,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    /// Whether to print `= help:` lines.
    pub fn hints(mut self, value: bool) -> Self {
        self.hints = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }

            let level = match diag.severity() {
                Severity::Error => c.red,
                Severity::Warning => c.yellow,
            };
            writeln!(w, "{level}{}{}: {}", diag.severity(), c.reset, diag.message())?;
            writeln!(w, "  {}-->{} {}{}{}", c.dim, c.reset, c.blue, diag.path(), c.reset)?;

            if self.hints {
                for hint in diag.hints() {
                    writeln!(w, "  {}= help:{} {hint}", c.dim, c.reset)?;
                }
            }
        }
        Ok(())
    }
}
