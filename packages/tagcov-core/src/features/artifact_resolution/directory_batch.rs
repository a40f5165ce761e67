//! Grouping of raw artifacts by output directory

use std::path::PathBuf;

use dashmap::DashMap;

use crate::shared::models::RawArtifactFile;

/// Directory → raw artifacts expected in it.
///
/// Filled concurrently by the per-file workers.
#[derive(Debug, Default)]
pub struct DirectoryBatches {
    batches: DashMap<PathBuf, Vec<RawArtifactFile>>,
}

impl DirectoryBatches {
    pub fn new() -> Self {
        Self {
            batches: DashMap::new(),
        }
    }

    pub fn insert(&self, raw: RawArtifactFile) {
        self.batches
            .entry(raw.directory.clone())
            .or_insert_with(Vec::new)
            .push(raw);
    }

    /// Number of distinct directories
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Total raw artifacts across all directories
    pub fn raw_count(&self) -> usize {
        self.batches.iter().map(|entry| entry.value().len()).sum()
    }

    /// Batches sorted by directory
    pub fn into_batches(self) -> Vec<(PathBuf, Vec<RawArtifactFile>)> {
        let mut batches: Vec<_> = self.batches.into_iter().collect();
        batches.sort_by(|a, b| a.0.cmp(&b.0));
        batches
    }
}

impl FromIterator<RawArtifactFile> for DirectoryBatches {
    fn from_iter<I: IntoIterator<Item = RawArtifactFile>>(iter: I) -> Self {
        let batches = Self::new();
        for raw in iter {
            batches.insert(raw);
        }
        batches
    }
}
