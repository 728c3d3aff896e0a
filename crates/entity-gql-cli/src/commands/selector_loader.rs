use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use entity_gql_core::{Selector, parse_selector};

/// Failure to obtain a selector from the command line.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("selector is required: use a positional argument or -s/--selector")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid selector JSON in {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
}

/// Load a selector from inline JSON, stdin (`-`), or a file.
pub fn load_selector(
    selector_path: Option<&Path>,
    selector_text: Option<&str>,
) -> Result<Selector, LoadError> {
    if let Some(text) = selector_text {
        return parse(text, "<inline>");
    }

    let Some(path) = selector_path else {
        return Err(LoadError::Missing);
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return parse(&buf, "<stdin>");
    }

    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text, &format!("'{}'", path.display()))
}

fn parse(text: &str, origin: &str) -> Result<Selector, LoadError> {
    let selector = parse_selector(text).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    tracing::debug!(
        origin,
        relationships = selector.relationships.len(),
        depth = selector.depth(),
        "loaded selector"
    );
    Ok(selector)
}
