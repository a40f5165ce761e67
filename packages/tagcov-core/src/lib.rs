/*
 * Tagcov Core - Date/Author Artifact Grouping Engine
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Project, ArtifactFile) and ports
 * - features/    : Vertical slices (tags → normalization → path mapping → artifacts → grouping)
 * - pipeline/    : Per-project aggregation and multi-project orchestration
 * - config/      : Report options (defaults, YAML, validation)
 *
 * Performance:
 * - Rayon work-stealing over source files
 * - One directory listing per output directory
 * - DashMap grouping shared by all workers
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models, constants and ports
pub mod shared;

/// Feature modules (extraction → normalization → resolution → grouping)
pub mod features;

/// Project aggregation and orchestration
pub mod pipeline;

/// Report configuration
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, ConfigResult, ReportConfig};
pub use errors::{Result, TagcovError};
pub use features::aggregation::{ArtifactGrouping, GroupedArtifacts};
pub use pipeline::{ProjectAggregator, ProjectOrchestrator, ProjectReport, ReportSummary};
pub use shared::models::{ArtifactFile, DependencyScope, Project, RawArtifactFile};
pub use shared::ports::{
    ArtifactBundle, FileFilter, ProjectModel, ReportGroupVisitor, ReportSupport,
};
