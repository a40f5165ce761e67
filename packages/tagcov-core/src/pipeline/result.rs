//! Run results

use std::time::Duration;

use serde::Serialize;

use crate::features::aggregation::GroupedArtifacts;
use crate::features::artifact_resolution::ResolutionStats;

/// Outcome of grouping one project
#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    /// Project id
    pub project: String,

    pub grouped: GroupedArtifacts,

    /// Source files seen after filtering
    pub source_files: usize,

    /// Source files that survived tagging, normalization and baseline
    pub tagged_files: usize,

    pub resolution: ResolutionStats,

    pub elapsed: Duration,
}

impl ProjectReport {
    pub fn authors(&self) -> Vec<&str> {
        self.grouped.authors().into_iter().collect()
    }
}

/// Outcome of a whole report run
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// Name of the top-level report group
    pub title: String,

    /// Reports in processing order
    pub projects: Vec<ProjectReport>,

    pub elapsed: Duration,
}

impl ReportSummary {
    pub fn project(&self, id: &str) -> Option<&ProjectReport> {
        self.projects.iter().find(|p| p.project == id)
    }

    pub fn artifact_count(&self) -> usize {
        self.projects.iter().map(|p| p.grouped.file_count()).sum()
    }
}
