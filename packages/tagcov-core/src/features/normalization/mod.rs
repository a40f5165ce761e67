//! Normalization Feature
//!
//! Turns raw tag values into grouping keys:
//! - dates → canonical `yyyyMMdd` + `yyyy年MM月` period key
//! - author values → name truncated at the first delimiter

pub mod author;
pub mod date;

pub use author::AuthorNormalizer;
pub use date::{DateNormalizer, DatePattern, NormalizedDate};
