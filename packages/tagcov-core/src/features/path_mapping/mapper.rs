//! Source to output path mapping

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Maps `src/com/acme/Foo.java` to `target/classes/com/acme/Foo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapper {
    source_root: PathBuf,
    output_root: PathBuf,
    source_suffix: String,
}

impl PathMapper {
    pub fn new(
        source_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        source_suffix: impl Into<String>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
            source_suffix: source_suffix.into(),
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Suffix-free artifact base path for a source file.
    ///
    /// Returns `None` for files outside the source root. A file without the
    /// source suffix keeps its name unchanged.
    pub fn base_path(&self, source_file: &Path) -> Option<PathBuf> {
        let relative = match source_file.strip_prefix(&self.source_root) {
            Ok(rel) => rel,
            Err(_) => {
                debug!(
                    "Skipping {}: not under source root {}",
                    source_file.display(),
                    self.source_root.display()
                );
                return None;
            }
        };

        let mapped = self.output_root.join(relative);
        let file_name = mapped.file_name()?.to_string_lossy().into_owned();
        let stem = file_name
            .strip_suffix(self.source_suffix.as_str())
            .unwrap_or(&file_name);
        if stem.is_empty() {
            return None;
        }

        Some(mapped.with_file_name(OsString::from(stem)))
    }
}
