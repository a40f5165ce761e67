//! Default report-support sink

use std::path::PathBuf;

use crate::errors::Result;
use crate::shared::models::Project;
use crate::shared::ports::{ArtifactBundle, ReportGroupVisitor, ReportSupport};

/// Hands each author's artifacts to the group as an [`ArtifactBundle`]
/// without looking at them.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundleReportSupport;

impl BundleReportSupport {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSupport for BundleReportSupport {
    fn process_project(
        &self,
        group: &mut dyn ReportGroupVisitor,
        bundle_name: &str,
        project: &Project,
        artifacts: &[PathBuf],
        source_encoding: &str,
    ) -> Result<()> {
        group.visit_bundle(ArtifactBundle {
            name: bundle_name.to_string(),
            project: project.id.clone(),
            artifacts: artifacts.to_vec(),
            source_encoding: source_encoding.to_string(),
        })
    }
}
