//! Shared module - Common types and utilities
//!
//! Types shared across all features. Nothing in here touches tree-sitter
//! or the file system.

pub mod constants;
pub mod models;
pub mod ports;

// Re-exports for convenience
pub use models::*;
