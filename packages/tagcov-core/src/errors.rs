//! Error types for tagcov-core
//!
//! Only failures that stop a whole project from being enumerated live here.
//! Per-file problems are logged and the file is dropped from the grouping.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for tagcov-core operations
#[derive(Debug, Error)]
pub enum TagcovError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source tree traversal error
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Include/exclude pattern could not be compiled
    #[error("Invalid file pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// Project model lookup failed
    #[error("Project model error: {0}")]
    ProjectModel(String),

    /// Report sink or group visitor failed
    #[error("Report error: {0}")]
    Report(String),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Worker pool could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl TagcovError {
    /// Create a project model error
    pub fn project_model(msg: impl Into<String>) -> Self {
        TagcovError::ProjectModel(msg.into())
    }

    /// Create a report error
    pub fn report(msg: impl Into<String>) -> Self {
        TagcovError::Report(msg.into())
    }
}

/// Result type alias for tagcov operations
pub type Result<T> = std::result::Result<T, TagcovError>;
