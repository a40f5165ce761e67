//! Aggregation Feature
//!
//! Two-level period → author → files grouping. Writers share an
//! [`ArtifactGrouping`]; once all writers are done it is frozen into a
//! sorted [`GroupedArtifacts`].

pub mod grouping;

pub use grouping::{ArtifactGrouping, AuthorFiles, GroupedArtifacts};
