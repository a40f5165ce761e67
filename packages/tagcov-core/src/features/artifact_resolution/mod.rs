//! Artifact Resolution Feature
//!
//! Expected artifact locations are batched by directory first, then every
//! directory is listed exactly once and matched against all base paths that
//! point into it.

pub mod directory_batch;
pub mod sibling_resolver;

pub use directory_batch::DirectoryBatches;
pub use sibling_resolver::{ResolutionStats, SiblingArtifactResolver};
