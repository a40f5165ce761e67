use std::path::PathBuf;

use tagcov_core::{ConfigError, TagcovError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrchestrationError>;

#[derive(Error, Debug)]
pub enum OrchestrationError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Engine(#[from] TagcovError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Workspace manifest errors
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Cannot read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Duplicate project id in manifest: {0}")]
    DuplicateProject(String),

    #[error("Project not found in manifest: {0}")]
    UnknownProject(String),
}
