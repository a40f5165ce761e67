//! One report run, start to finish

use std::sync::Arc;

use tagcov_core::pipeline::BundleReportSupport;
use tagcov_core::ProjectOrchestrator;
use tracing::info;

use crate::cli::Cli;
use crate::error::Result;
use crate::manifest::WorkspaceManifest;
use crate::report_tree::{ReportDocument, ReportTree};

/// Load the manifest, build the report for the selected project and
/// return the rendered document. Writing it out is left to the caller.
pub fn run(cli: &Cli) -> Result<ReportDocument> {
    let config = cli.report_config()?;
    let manifest = WorkspaceManifest::from_yaml(&cli.manifest)?;
    let root = manifest.project(&cli.project)?.clone();
    info!(
        "Loaded {} projects from {}",
        manifest.len(),
        cli.manifest.display()
    );

    let orchestrator = ProjectOrchestrator::from_config(config, Arc::new(manifest))?;

    let mut tree = ReportTree::new();
    let summary = orchestrator.create_report(&root, &mut tree, &BundleReportSupport)?;

    Ok(ReportDocument::new(&summary, tree))
}
