mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{CheckParams, FragmentsParams, QueryParams, SelectParams};

/// Color output mode for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Diagnostics go to stderr; that is the stream that matters.
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}
