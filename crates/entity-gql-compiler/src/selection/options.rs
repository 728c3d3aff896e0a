//! Options for selection-set compilation.

/// Options for [`compile`](super::compile).
///
/// The defaults (no includes, empty indent unit, depth 0) produce compact
/// output. A non-empty indent unit turns on pretty-printing: each line is
/// prefixed with the unit repeated `depth` times and closing braces end
/// their line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Field names forced into the root level
    pub(crate) include: Vec<String>,
    /// Indentation unit; empty means compact
    pub(crate) indent: String,
    /// Nesting level of the root
    pub(crate) depth: usize,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set field names to include at the root level.
    pub fn include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the indentation unit.
    pub fn indent(mut self, unit: impl Into<String>) -> Self {
        self.indent = unit.into();
        self
    }

    /// Set the nesting level of the root.
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn is_pretty(&self) -> bool {
        !self.indent.is_empty()
    }

    /// Line prefix at `depth` levels.
    pub(crate) fn prefix(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }
}
