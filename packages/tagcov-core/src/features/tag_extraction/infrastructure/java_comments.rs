//! Tree-sitter Javadoc scanner
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::Parser as TSParser;

use super::error::{Result, TagError};

/// Finds `/** ... */` comments in Java source
#[derive(Debug, Default, Clone, Copy)]
pub struct JavadocScanner;

impl JavadocScanner {
    pub fn new() -> Self {
        Self
    }

    /// Javadoc comment texts in document order.
    ///
    /// Tree-sitter recovers from syntax errors, so comments of a broken file
    /// are still reported.
    pub fn javadoc_comments<'s>(&self, source: &'s str) -> Result<Vec<&'s str>> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_java::language())
            .map_err(|e| TagError::ParseError(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| TagError::ParseError("Failed to parse source code".to_string()))?;

        let mut comments = Vec::new();
        let mut cursor = tree.walk();
        loop {
            let node = cursor.node();
            if node.kind() == "block_comment" {
                if let Some(text) = source.get(node.byte_range()) {
                    if is_javadoc(text) {
                        comments.push(text);
                    }
                }
            }

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return Ok(comments);
                }
            }
        }
    }
}

/// `/**` opens a doc comment, `/**/` is an empty plain comment
fn is_javadoc(text: &str) -> bool {
    text.starts_with("/**") && text != "/**/"
}
