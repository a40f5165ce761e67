//! Tag extraction use case

use std::path::Path;

use tracing::warn;

use crate::config::ReportConfig;
use crate::features::tag_extraction::domain::{parse_block_tags, CommentTags};
use crate::features::tag_extraction::infrastructure::{JavadocScanner, Result, TagError};

/// Reads the configured date and author tags from a source file
#[derive(Debug, Clone)]
pub struct TagExtractor {
    date_tag: String,
    author_tag: String,
    scanner: JavadocScanner,
}

impl TagExtractor {
    pub fn new(date_tag: impl Into<String>, author_tag: impl Into<String>) -> Self {
        Self {
            date_tag: date_tag.into(),
            author_tag: author_tag.into(),
            scanner: JavadocScanner::new(),
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.date_tag_name.clone(), config.author_tag_name.clone())
    }

    pub fn date_tag(&self) -> &str {
        &self.date_tag
    }

    pub fn author_tag(&self) -> &str {
        &self.author_tag
    }

    /// Extract tags from a file on disk.
    ///
    /// A file that vanished since discovery is reported as
    /// [`TagError::MissingSourceFile`]; the caller decides how loud to be.
    /// Missing tags are logged here.
    pub fn extract(&self, path: &Path) -> Result<CommentTags> {
        let bytes = std::fs::read(path).map_err(|e| TagError::from_io(path, e))?;
        let source = String::from_utf8_lossy(&bytes);
        let tags = self.extract_from_source(&source)?;

        let missing = tags.missing(&self.date_tag, &self.author_tag);
        if !missing.is_empty() {
            let names = missing
                .iter()
                .map(|name| format!("@{}", name))
                .collect::<Vec<_>>()
                .join(", ");
            warn!("Java source file missing {} tags: {}", names, path.display());
        }
        Ok(tags)
    }

    /// Extract tags from source text.
    ///
    /// Comments are visited in document order and their block tags in
    /// declaration order. The first occurrence of each tag wins; scanning
    /// stops once both have been seen.
    pub fn extract_from_source(&self, source: &str) -> Result<CommentTags> {
        let mut tags = CommentTags::absent();

        for comment in self.scanner.javadoc_comments(source)? {
            for tag in parse_block_tags(comment) {
                if tags.date.is_none() && tag.name == self.date_tag {
                    tags.date = Some(tag.content.clone());
                }
                if tags.author.is_none() && tag.name == self.author_tag {
                    tags.author = Some(tag.content);
                }
            }
            if tags.is_settled() {
                break;
            }
        }
        Ok(tags)
    }
}
