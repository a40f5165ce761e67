//! Artifact models
//!
//! A source file first becomes a [`RawArtifactFile`] (where its compiled
//! output should be), then one or more [`ArtifactFile`]s once the output
//! directory has been listed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Expected artifact location for one tagged source file, not yet checked on disk
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawArtifactFile {
    /// Period key (`2024年03月`)
    pub period: String,

    /// Normalized author
    pub author: String,

    /// Output directory expected to hold the artifacts
    pub directory: PathBuf,

    /// Artifact path without suffix (`target/classes/com/acme/Foo`)
    pub base_path: PathBuf,
}

impl RawArtifactFile {
    pub fn new(
        period: impl Into<String>,
        author: impl Into<String>,
        directory: impl Into<PathBuf>,
        base_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            period: period.into(),
            author: author.into(),
            directory: directory.into(),
            base_path: base_path.into(),
        }
    }

    /// Attach an on-disk artifact, inheriting period and author
    pub fn artifact(&self, file: impl Into<PathBuf>) -> ArtifactFile {
        ArtifactFile {
            period: self.period.clone(),
            author: self.author.clone(),
            file: file.into(),
        }
    }
}

/// Verified, on-disk artifact ready for grouping
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactFile {
    pub period: String,
    pub author: String,
    pub file: PathBuf,
}

impl ArtifactFile {
    pub fn new(period: impl Into<String>, author: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            period: period.into(),
            author: author.into(),
            file: file.into(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_artifact_inherits_tags() {
        let raw = RawArtifactFile::new("2024年03月", "Alice", "out/com", "out/com/Foo");
        let nested = raw.artifact("out/com/Foo$1.class");

        assert_eq!(nested.period, "2024年03月");
        assert_eq!(nested.author, "Alice");
        assert_eq!(nested.file(), Path::new("out/com/Foo$1.class"));
    }
}
