//! ANSI color codes for terminal output.
//!
//! Semantic slots used by diagnostics rendering:
//! - Red: error severity
//! - Yellow: warning severity
//! - Blue: selector paths and field names
//! - Dim: hints and secondary text

/// ANSI color palette for CLI output.
///
/// Uses only standard 16-color ANSI codes so it reads on light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub red: &'static str,
    pub yellow: &'static str,
    pub blue: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        red: "\x1b[31m",
        yellow: "\x1b[33m",
        blue: "\x1b[34m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        red: "",
        yellow: "",
        blue: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
