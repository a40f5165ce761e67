//! Primary and nested artifact lookup
//!
//! For a base path `out/com/acme/Foo` the resolver picks `Foo.class` plus
//! every `Foo$…` entry (`Foo$1.class`, `Foo$Inner.class`) from the same
//! directory. `FooBar.class` shares the prefix but not the separator and is
//! left alone.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::shared::constants::NESTED_ARTIFACT_SEPARATOR;
use crate::shared::models::{ArtifactFile, RawArtifactFile};

/// Counters from one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStats {
    pub directories_listed: usize,
    pub artifacts_found: usize,
}

/// Resolves raw artifacts to on-disk artifact files
#[derive(Debug, Clone)]
pub struct SiblingArtifactResolver {
    artifact_suffix: String,
}

impl SiblingArtifactResolver {
    pub fn new(artifact_suffix: impl Into<String>) -> Self {
        Self {
            artifact_suffix: artifact_suffix.into(),
        }
    }

    /// Entries of `directory`. Missing or unreadable directories are empty.
    pub fn list_directory(&self, directory: &Path) -> Vec<PathBuf> {
        match std::fs::read_dir(directory) {
            Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
            Err(e) => {
                debug!("Cannot list {}: {}", directory.display(), e);
                Vec::new()
            }
        }
    }

    /// True when `entry` is the primary artifact of `base_path` or one of its
    /// nested artifacts
    pub fn is_sibling(&self, base_path: &Path, entry: &Path) -> bool {
        if entry.parent() != base_path.parent() {
            return false;
        }
        let (Some(base), Some(name)) = (base_path.file_name(), entry.file_name()) else {
            return false;
        };
        let base = base.to_string_lossy();
        let name = name.to_string_lossy();

        match name.strip_prefix(base.as_ref()) {
            Some(rest) => {
                rest == self.artifact_suffix || rest.starts_with(NESTED_ARTIFACT_SEPARATOR)
            }
            None => false,
        }
    }

    /// Artifacts of every raw artifact in one directory, listing it once
    pub fn resolve_directory(&self, directory: &Path, raws: &[RawArtifactFile]) -> Vec<ArtifactFile> {
        let entries = self.list_directory(directory);
        let mut found = Vec::new();
        for raw in raws {
            for entry in &entries {
                if self.is_sibling(&raw.base_path, entry) {
                    info!("Found class file: {}", entry.display());
                    found.push(raw.artifact(entry.clone()));
                }
            }
        }
        found
    }

    /// Resolve all directory batches in parallel, feeding each artifact to `sink`
    pub fn resolve_batches<F>(
        &self,
        batches: &[(PathBuf, Vec<RawArtifactFile>)],
        sink: F,
    ) -> ResolutionStats
    where
        F: Fn(ArtifactFile) + Sync,
    {
        let found = AtomicUsize::new(0);
        batches.par_iter().for_each(|(directory, raws)| {
            let artifacts = self.resolve_directory(directory, raws);
            found.fetch_add(artifacts.len(), Ordering::Relaxed);
            artifacts.into_iter().for_each(&sink);
        });

        ResolutionStats {
            directories_listed: batches.len(),
            artifacts_found: found.into_inner(),
        }
    }
}
