//! Error types for skeleton rendering

use std::path::PathBuf;
use thiserror::Error;

/// Result type for templating operations
pub type Result<T> = std::result::Result<T, TemplatingError>;

/// Errors raised while locating, parsing or rendering a skeleton
#[derive(Debug, Error)]
pub enum TemplatingError {
    /// No override directory and no built-in skeleton has this name
    #[error("skeleton not found: {name} (searched: {})", join_paths(searched))]
    NotFound {
        name: String,
        searched: Vec<PathBuf>,
    },

    /// Template syntax error
    #[error("template parse error: {0}")]
    Parse(String),

    /// Rendering failed
    #[error("template render error: {0}")]
    Render(String),

    /// Skeleton rejected before parsing
    #[error("template security error: {0}")]
    Security(String),

    /// IO error reading a skeleton or writing output
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl TemplatingError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
