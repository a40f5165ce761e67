//! Feature modules
//!
//! Each slice owns one step of the per-file pipeline:
//! - `tag_extraction`      - `@date` / `@author` from Javadoc comments
//! - `normalization`       - canonical dates, period keys, author names
//! - `path_mapping`        - source path → artifact base path
//! - `artifact_resolution` - directory-batched primary + nested artifact lookup
//! - `aggregation`         - concurrent period → author → files grouping
//! - `file_filter`         - include/exclude source discovery

pub mod aggregation;
pub mod artifact_resolution;
pub mod file_filter;
pub mod normalization;
pub mod path_mapping;
pub mod tag_extraction;
