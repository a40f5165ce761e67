//! Ant-style include/exclude globs
//!
//! `**` spans directories, `*` and `?` stay within one path segment, a
//! trailing `/` means "everything below". Patterns are matched against the
//! path relative to the walked root, with `/` separators.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::warn;
use walkdir::WalkDir;

use crate::errors::{Result, TagcovError};
use crate::shared::constants::DEFAULT_INCLUDE;
use crate::shared::ports::FileFilter;

/// One compiled glob
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    regex: Regex,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let normalized = pattern.trim().replace('\\', "/");
        let normalized = normalized.trim_start_matches('/');
        let normalized = if normalized.ends_with('/') {
            format!("{}**", normalized)
        } else {
            normalized.to_string()
        };

        let regex = Regex::new(&glob_to_regex(&normalized)).map_err(|e| TagcovError::Pattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Match a `/`-separated relative path
    pub fn matches(&self, relative: &str) -> bool {
        self.regex.is_match(relative)
    }
}

fn glob_to_regex(glob: &str) -> String {
    let chars: Vec<char> = glob.chars().collect();
    let mut out = String::from("^");
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                let at_segment_start = i == 0 || chars[i - 1] == '/';
                if at_segment_start && chars.get(i + 2) == Some(&'/') {
                    // "**/" matches zero or more directories
                    out.push_str("(?:.*/)?");
                    i += 3;
                } else {
                    out.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                out.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                out.push_str("[^/]");
                i += 1;
            }
            c => {
                out.push_str(&regex::escape(&c.to_string()));
                i += 1;
            }
        }
    }

    out.push('$');
    out
}

/// Walks a source root and applies include/exclude globs
#[derive(Debug, Clone)]
pub struct GlobFileFilter {
    includes: Vec<GlobPattern>,
    excludes: Vec<GlobPattern>,
}

impl GlobFileFilter {
    /// An empty include list means "everything"
    pub fn new<S: AsRef<str>>(includes: &[S], excludes: &[S]) -> Result<Self> {
        let mut include_patterns = includes
            .iter()
            .map(|p| GlobPattern::new(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if include_patterns.is_empty() {
            include_patterns.push(GlobPattern::new(DEFAULT_INCLUDE)?);
        }

        let exclude_patterns = excludes
            .iter()
            .map(|p| GlobPattern::new(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            includes: include_patterns,
            excludes: exclude_patterns,
        })
    }

    /// Include/exclude decision for a path relative to the root
    pub fn accepts(&self, relative: &str) -> bool {
        self.includes.iter().any(|p| p.matches(relative))
            && !self.excludes.iter().any(|p| p.matches(relative))
    }
}

impl FileFilter for GlobFileFilter {
    fn files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            warn!("Source directory does not exist: {}", root.display());
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                // only an unreadable root stops enumeration
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if self.accepts(&relative) {
                files.push(path.to_path_buf());
            }
        }
        Ok(files)
    }
}
