//! Error type for config loading and page output.

use std::path::PathBuf;

/// Errors raised outside of rendering (which itself cannot fail).
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid JSON for [`crate::config::SiteConfig`]
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Config parsed but holds an unusable value
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}
