//! Tag Extraction Feature
//!
//! Pulls the date and author tags out of a Java source file's documentation
//! comments.
//!
//! ## Structure
//! - `domain/` - CommentTags, Javadoc block tag model
//! - `infrastructure/` - tree-sitter comment scanner, errors
//! - `application/` - TagExtractor

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer (primary interface)
pub use application::*;

// Re-export domain types
pub use domain::*;

// Re-export infrastructure (internal use - prefer application layer)
#[doc(hidden)]
pub use infrastructure::*;
