//! In-memory port implementations

use std::collections::HashMap;

use tagcov_core::{
    ArtifactBundle, DependencyScope, Project, ProjectModel, ReportGroupVisitor, Result,
    TagcovError,
};

/// Project model backed by a map of known projects
#[derive(Debug, Default)]
pub struct MapProjectModel {
    projects: HashMap<String, Project>,
}

impl MapProjectModel {
    pub fn new(projects: impl IntoIterator<Item = Project>) -> Self {
        Self {
            projects: projects.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }
}

impl ProjectModel for MapProjectModel {
    fn dependency_projects(
        &self,
        project: &Project,
        scopes: &[DependencyScope],
    ) -> Result<Vec<Project>> {
        Ok(project
            .dependencies
            .iter()
            .filter(|d| scopes.contains(&d.scope))
            .filter_map(|d| self.projects.get(&d.project).cloned())
            .collect())
    }
}

/// Project model that always fails
pub struct BrokenProjectModel;

impl ProjectModel for BrokenProjectModel {
    fn dependency_projects(&self, _: &Project, _: &[DependencyScope]) -> Result<Vec<Project>> {
        Err(TagcovError::project_model("dependency graph unavailable"))
    }
}

/// Records every group path and bundle it is handed
#[derive(Debug, Default)]
pub struct RecordingVisitor {
    pub groups: Vec<Vec<String>>,
    pub bundles: Vec<(Vec<String>, ArtifactBundle)>,
}

impl RecordingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group paths joined with " / "
    pub fn group_paths(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.join(" / ")).collect()
    }

    /// Bundle at the given group path, if any
    pub fn bundle(&self, path: &[&str], name: &str) -> Option<&ArtifactBundle> {
        self.bundles
            .iter()
            .find(|(p, b)| p.iter().map(String::as_str).eq(path.iter().copied()) && b.name == name)
            .map(|(_, b)| b)
    }
}

struct RecordingGroup<'a> {
    recorder: &'a mut RecordingVisitor,
    path: Vec<String>,
}

impl ReportGroupVisitor for RecordingVisitor {
    fn visit_group(&mut self, name: &str) -> Result<Box<dyn ReportGroupVisitor + '_>> {
        let path = vec![name.to_string()];
        self.groups.push(path.clone());
        Ok(Box::new(RecordingGroup {
            recorder: self,
            path,
        }))
    }

    fn visit_bundle(&mut self, bundle: ArtifactBundle) -> Result<()> {
        self.bundles.push((Vec::new(), bundle));
        Ok(())
    }
}

impl ReportGroupVisitor for RecordingGroup<'_> {
    fn visit_group(&mut self, name: &str) -> Result<Box<dyn ReportGroupVisitor + '_>> {
        let mut path = self.path.clone();
        path.push(name.to_string());
        self.recorder.groups.push(path.clone());
        Ok(Box::new(RecordingGroup {
            recorder: &mut *self.recorder,
            path,
        }))
    }

    fn visit_bundle(&mut self, bundle: ArtifactBundle) -> Result<()> {
        self.recorder.bundles.push((self.path.clone(), bundle));
        Ok(())
    }
}
