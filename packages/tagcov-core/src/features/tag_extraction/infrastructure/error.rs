/// Tag extraction errors
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("Source file not found: {}", .0.display())]
    MissingSourceFile(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl TagError {
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            TagError::MissingSourceFile(path)
        } else {
            TagError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, TagError>;
