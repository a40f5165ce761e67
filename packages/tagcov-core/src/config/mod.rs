//! Report configuration
//!
//! Options are layered: built-in defaults, then an optional YAML file,
//! then whatever the caller (usually the CLI) overrides on top.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tagcov_core::config::ReportConfig;
//!
//! let config = ReportConfig::default()
//!     .with_baseline_date("2024-04-01")
//!     .with_author_delimiters(vec!["/".into(), " ".into()]);
//! config.validate()?;
//!
//! let from_file = ReportConfig::from_yaml("tagcov.yaml")?;
//! ```

pub mod error;
pub mod report_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use report_config::ReportConfig;
