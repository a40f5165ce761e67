//! Shared domain models

pub mod artifact;
pub mod project;

pub use artifact::{ArtifactFile, RawArtifactFile};
pub use project::{Dependency, DependencyScope, Project};
