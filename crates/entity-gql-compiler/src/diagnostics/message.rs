/// Diagnostic kinds, one per way input can be dropped or distrusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Relationship could not be compiled
    MissingKeyId,
    MissingKeyValue,
    DuplicateField,

    // Call shape
    UnrecognizedCallShape,
    IgnoredArgument,

    // Fragment text
    UnbalancedBraces,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnbalancedBraces => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingKeyId | Self::MissingKeyValue => {
                Some("relationships are compiled only when both `keyId` and `keyValue` are strings")
            }
            Self::UnrecognizedCallShape => Some(
                "expected (name, selector) or (name, params, selector); rendered as fragments instead",
            ),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::MissingKeyId => "relationship skipped: `keyId` is missing",
            Self::MissingKeyValue => "relationship skipped: `keyValue` is missing",
            Self::DuplicateField => "relationship skipped: field already selected at this level",
            Self::UnrecognizedCallShape => "unrecognized call shape",
            Self::IgnoredArgument => "argument ignored",
            Self::UnbalancedBraces => "unbalanced braces in fragment",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::DuplicateField => {
                "relationship skipped: `{}` is already selected at this level".to_string()
            }
            Self::IgnoredArgument => "{} argument ignored".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One reported omission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    /// Where it happened: `$.relationships[0].relationships[2]`, `args[3]`, ...
    pub(crate) path: String,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl Diagnostic {
    pub(crate) fn with_default_message(kind: DiagnosticKind, path: String) -> Self {
        Self {
            kind,
            path,
            message: kind.fallback_message().to_string(),
            hints: kind.default_hint().map(str::to_string).into_iter().collect(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} at {}", self.severity(), self.message, self.path)
    }
}
