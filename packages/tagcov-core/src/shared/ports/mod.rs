//! Ports (interfaces) to the engine's external collaborators
//!
//! The engine never reads artifact contents, renders reports or knows how
//! projects are described on disk. Drivers plug those in through these traits.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::shared::models::{DependencyScope, Project};

/// Project model accessor
pub trait ProjectModel: Send + Sync {
    /// Direct dependency projects of `project` whose scope is in `scopes`.
    ///
    /// Dependencies that are not projects of the same workspace are skipped.
    fn dependency_projects(
        &self,
        project: &Project,
        scopes: &[DependencyScope],
    ) -> Result<Vec<Project>>;
}

/// Source file discovery below a root directory
pub trait FileFilter: Send + Sync {
    /// Candidate source files under `root`, in a stable order
    fn files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// One author's artifacts within a project, handed to a report group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    /// Bundle label (the author)
    pub name: String,

    /// Id of the project the artifacts belong to
    pub project: String,

    pub artifacts: Vec<PathBuf>,

    pub source_encoding: String,
}

/// Hierarchical report namer.
///
/// A child group borrows its parent, so groups are filled depth first.
pub trait ReportGroupVisitor {
    /// Open a named child group
    fn visit_group(&mut self, name: &str) -> Result<Box<dyn ReportGroupVisitor + '_>>;

    /// Attach a bundle to this group
    fn visit_bundle(&mut self, bundle: ArtifactBundle) -> Result<()>;
}

/// Report support sink: turns a list of artifacts into report content
pub trait ReportSupport: Send + Sync {
    fn process_project(
        &self,
        group: &mut dyn ReportGroupVisitor,
        bundle_name: &str,
        project: &Project,
        artifacts: &[PathBuf],
        source_encoding: &str,
    ) -> Result<()>;
}
