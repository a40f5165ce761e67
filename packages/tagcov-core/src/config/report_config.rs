//! Date/author report options

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::shared::constants::{
    DEFAULT_ARTIFACT_SUFFIX, DEFAULT_AUTHOR_DELIMITERS, DEFAULT_AUTHOR_TAG, DEFAULT_DATE_PATTERNS,
    DEFAULT_DATE_TAG, DEFAULT_INCLUDE, DEFAULT_SOURCE_ENCODING, DEFAULT_SOURCE_SUFFIX,
};

/// Options recognized by the date/author grouping engine.
///
/// Every field has a default, so a YAML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Documentation tag holding the creation date (`@date`)
    pub date_tag_name: String,

    /// Ordered date patterns, first match wins
    pub date_patterns: Vec<String>,

    /// Documentation tag holding the author (`@author`)
    pub author_tag_name: String,

    /// Substrings that cut the author value short
    pub author_delimiters: Vec<String>,

    /// Inclusive lower bound on the normalized date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_date: Option<String>,

    /// Force multi-project mode regardless of packaging
    pub aggregate_projects: bool,

    /// Include globs relative to the source root
    pub includes: Vec<String>,

    /// Exclude globs relative to the source root
    pub excludes: Vec<String>,

    /// Encoding handed to the report sink
    pub source_encoding: String,

    /// Top-level report group name (defaults to the project name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Worker pool size (None = rayon default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_workers: Option<usize>,

    pub source_suffix: String,

    pub artifact_suffix: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            date_tag_name: DEFAULT_DATE_TAG.to_string(),
            date_patterns: DEFAULT_DATE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            author_tag_name: DEFAULT_AUTHOR_TAG.to_string(),
            author_delimiters: DEFAULT_AUTHOR_DELIMITERS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            baseline_date: None,
            aggregate_projects: false,
            includes: vec![DEFAULT_INCLUDE.to_string()],
            excludes: Vec::new(),
            source_encoding: DEFAULT_SOURCE_ENCODING.to_string(),
            title: None,
            parallel_workers: None,
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            artifact_suffix: DEFAULT_ARTIFACT_SUFFIX.to_string(),
        }
    }
}

impl ReportConfig {
    /// Load options from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse options from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config: ReportConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self).map_err(ConfigError::Yaml)
    }

    /// Structural checks only.
    ///
    /// Date patterns and author delimiters are not checked; a pattern that
    /// never matches just excludes files.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.date_tag_name.trim().is_empty() {
            return Err(ConfigError::invalid("date_tag_name", "must not be empty"));
        }
        if self.author_tag_name.trim().is_empty() {
            return Err(ConfigError::invalid("author_tag_name", "must not be empty"));
        }
        if self.source_suffix.is_empty() {
            return Err(ConfigError::invalid("source_suffix", "must not be empty"));
        }
        if self.artifact_suffix.is_empty() {
            return Err(ConfigError::invalid("artifact_suffix", "must not be empty"));
        }
        if self.parallel_workers == Some(0) {
            return Err(ConfigError::invalid(
                "parallel_workers",
                "must be at least 1 when set",
            ));
        }
        Ok(())
    }

    pub fn with_date_tag_name(mut self, name: impl Into<String>) -> Self {
        self.date_tag_name = name.into();
        self
    }

    pub fn with_date_patterns(mut self, patterns: Vec<String>) -> Self {
        self.date_patterns = patterns;
        self
    }

    pub fn with_author_tag_name(mut self, name: impl Into<String>) -> Self {
        self.author_tag_name = name.into();
        self
    }

    pub fn with_author_delimiters(mut self, delimiters: Vec<String>) -> Self {
        self.author_delimiters = delimiters;
        self
    }

    pub fn with_baseline_date(mut self, baseline: impl Into<String>) -> Self {
        self.baseline_date = Some(baseline.into());
        self
    }

    pub fn with_aggregate_projects(mut self, aggregate: bool) -> Self {
        self.aggregate_projects = aggregate;
        self
    }

    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn with_source_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.source_encoding = encoding.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_parallel_workers(mut self, workers: usize) -> Self {
        self.parallel_workers = Some(workers);
        self
    }
}
