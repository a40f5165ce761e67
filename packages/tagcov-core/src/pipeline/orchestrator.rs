//! Report orchestration
//!
//! Decides between single-project and aggregate mode, opens the report
//! groups and feeds every (period, author) bundle to the report support.
//!
//! ```text
//! <title>
//! ├── <dependency id>          (aggregate mode only, nested for pom deps)
//! │   ├── 2024年03月
//! │   │   ├── Alice  → ReportSupport::process_project
//! │   │   └── Bob
//! │   └── 2024年04月
//! └── …
//! ```

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::errors::Result;
use crate::features::file_filter::GlobFileFilter;
use crate::pipeline::aggregator::ProjectAggregator;
use crate::pipeline::result::{ProjectReport, ReportSummary};
use crate::shared::models::{DependencyScope, Project};
use crate::shared::ports::{FileFilter, ProjectModel, ReportGroupVisitor, ReportSupport};

pub struct ProjectOrchestrator {
    config: ReportConfig,
    aggregator: ProjectAggregator,
    model: Arc<dyn ProjectModel>,
    filter: Arc<dyn FileFilter>,
}

impl ProjectOrchestrator {
    pub fn new(
        config: ReportConfig,
        model: Arc<dyn ProjectModel>,
        filter: Arc<dyn FileFilter>,
    ) -> Result<Self> {
        let aggregator = ProjectAggregator::new(&config)?;
        Ok(Self {
            config,
            aggregator,
            model,
            filter,
        })
    }

    /// Orchestrator with a glob filter built from the config's
    /// include/exclude lists
    pub fn from_config(config: ReportConfig, model: Arc<dyn ProjectModel>) -> Result<Self> {
        let filter = GlobFileFilter::new(config.includes.as_slice(), config.excludes.as_slice())?;
        Self::new(config, model, Arc::new(filter))
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Aggregate mode: forced by config, or implied by `pom` packaging
    pub fn should_aggregate(&self, project: &Project) -> bool {
        self.config.aggregate_projects || project.is_aggregator()
    }

    /// Build the whole report for `root`
    pub fn create_report(
        &self,
        root: &Project,
        visitor: &mut dyn ReportGroupVisitor,
        support: &dyn ReportSupport,
    ) -> Result<ReportSummary> {
        info!("Start generating date author aggregate coverage report");
        let start = Instant::now();

        let title = self
            .config
            .title
            .clone()
            .unwrap_or_else(|| root.name.clone());

        let mut projects = Vec::new();
        {
            let mut group = visitor.visit_group(&title)?;
            if self.should_aggregate(root) {
                let mut visited = HashSet::from([root.id.clone()]);
                self.report_dependencies(root, group.as_mut(), support, &mut visited, &mut projects)?;
            } else {
                projects.push(self.report_project(root, group.as_mut(), support)?);
            }
        }

        let elapsed = start.elapsed();
        info!("------------------------------------------------------------------------");
        info!(
            "Generate date author aggregate coverage report in {:.3} s",
            elapsed.as_secs_f64()
        );
        info!("------------------------------------------------------------------------");

        Ok(ReportSummary {
            title,
            projects,
            elapsed,
        })
    }

    fn report_dependencies(
        &self,
        project: &Project,
        group: &mut dyn ReportGroupVisitor,
        support: &dyn ReportSupport,
        visited: &mut HashSet<String>,
        projects: &mut Vec<ProjectReport>,
    ) -> Result<()> {
        let dependencies = self
            .model
            .dependency_projects(project, &DependencyScope::REPORTED)?;

        for dependency in dependencies {
            if !visited.insert(dependency.id.clone()) {
                debug!("Project {} already reported, skipping", dependency.id);
                continue;
            }

            let mut child = group.visit_group(&dependency.id)?;
            if dependency.is_aggregator() {
                self.report_dependencies(&dependency, child.as_mut(), support, visited, projects)?;
            } else {
                projects.push(self.report_project(&dependency, child.as_mut(), support)?);
            }
        }
        Ok(())
    }

    fn report_project(
        &self,
        project: &Project,
        group: &mut dyn ReportGroupVisitor,
        support: &dyn ReportSupport,
    ) -> Result<ProjectReport> {
        let report = self.aggregator.aggregate(project, self.filter.as_ref())?;

        for (period, authors) in report.grouped.periods() {
            let mut period_group = group.visit_group(period)?;
            for (author, files) in authors {
                support.process_project(
                    period_group.as_mut(),
                    author,
                    project,
                    files,
                    &self.config.source_encoding,
                )?;
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    struct NoDependencies;

    impl ProjectModel for NoDependencies {
        fn dependency_projects(&self, _: &Project, _: &[DependencyScope]) -> Result<Vec<Project>> {
            Ok(Vec::new())
        }
    }

    struct NoFiles;

    impl FileFilter for NoFiles {
        fn files(&self, _: &Path) -> Result<Vec<PathBuf>> {
            Ok(Vec::new())
        }
    }

    fn orchestrator(config: ReportConfig) -> ProjectOrchestrator {
        ProjectOrchestrator::new(config, Arc::new(NoDependencies), Arc::new(NoFiles)).unwrap()
    }

    #[test]
    fn test_pom_packaging_implies_aggregation() {
        let o = orchestrator(ReportConfig::default());
        let jar = Project::new("app", "src", "out");
        let pom = Project::new("parent", "src", "out").with_packaging("POM");

        assert!(!o.should_aggregate(&jar));
        assert!(o.should_aggregate(&pom));
    }

    #[test]
    fn test_flag_forces_aggregation() {
        let o = orchestrator(ReportConfig::default().with_aggregate_projects(true));
        assert!(o.should_aggregate(&Project::new("app", "src", "out")));
    }
}
