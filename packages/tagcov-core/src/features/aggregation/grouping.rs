//! Period → author → files grouping

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::shared::models::ArtifactFile;

/// Author → artifact files of one period
pub type AuthorFiles = BTreeMap<String, Vec<PathBuf>>;

/// Concurrent grouping target.
///
/// Both levels are `DashMap`s so any number of workers can insert at once
/// without losing or duplicating entries.
#[derive(Debug, Default)]
pub struct ArtifactGrouping {
    periods: DashMap<String, DashMap<String, Vec<PathBuf>>>,
}

impl ArtifactGrouping {
    pub fn new() -> Self {
        Self {
            periods: DashMap::new(),
        }
    }

    pub fn insert(&self, artifact: ArtifactFile) {
        // Only the read lock on the period shard is held while the author
        // map takes its own write lock.
        let authors = self
            .periods
            .entry(artifact.period)
            .or_insert_with(DashMap::new)
            .downgrade();
        authors
            .entry(artifact.author)
            .or_insert_with(Vec::new)
            .push(artifact.file);
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Freeze into sorted maps with sorted file lists
    pub fn into_grouped(self) -> GroupedArtifacts {
        let periods = self
            .periods
            .into_iter()
            .map(|(period, authors)| {
                let authors: AuthorFiles = authors
                    .into_iter()
                    .map(|(author, mut files)| {
                        files.sort();
                        (author, files)
                    })
                    .collect();
                (period, authors)
            })
            .collect();
        GroupedArtifacts { periods }
    }
}

/// Frozen grouping result with deterministic iteration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedArtifacts {
    periods: BTreeMap<String, AuthorFiles>,
}

impl GroupedArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Period keys with their author maps, in key order
    pub fn periods(&self) -> impl Iterator<Item = (&str, &AuthorFiles)> {
        self.periods.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn period(&self, period: &str) -> Option<&AuthorFiles> {
        self.periods.get(period)
    }

    pub fn files(&self, period: &str, author: &str) -> Option<&[PathBuf]> {
        self.periods
            .get(period)
            .and_then(|authors| authors.get(author))
            .map(Vec::as_slice)
    }

    /// Distinct authors across all periods
    pub fn authors(&self) -> BTreeSet<&str> {
        self.periods
            .values()
            .flat_map(|authors| authors.keys().map(String::as_str))
            .collect()
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    pub fn file_count(&self) -> usize {
        self.periods
            .values()
            .flat_map(|authors| authors.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, AuthorFiles> {
        self.periods
    }
}

impl FromIterator<ArtifactFile> for GroupedArtifacts {
    fn from_iter<I: IntoIterator<Item = ArtifactFile>>(iter: I) -> Self {
        let grouping = ArtifactGrouping::new();
        for artifact in iter {
            grouping.insert(artifact);
        }
        grouping.into_grouped()
    }
}
