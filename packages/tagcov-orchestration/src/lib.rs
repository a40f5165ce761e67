/*
 * Tagcov Orchestration - Report Driver
 *
 * Wires the grouping engine to a concrete workspace:
 * - Workspace manifest (YAML) as the project model
 * - Report tree as the group visitor, rendered to JSON
 * - Config layering: defaults ← YAML file ← command line
 * - tracing-subscriber setup for the binary
 */

// Public modules
pub mod cli;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod report_tree;
pub mod runner;

// Re-exports
pub use cli::Cli;
pub use error::{ManifestError, OrchestrationError, Result};
pub use logging::init_logging;
pub use manifest::{ManifestProject, WorkspaceManifest};
pub use report_tree::{ProjectStats, ReportDocument, ReportNode, ReportTree};
pub use runner::run;
