//! Workspace manifest
//!
//! A YAML file listing the projects of a workspace. Directories are resolved
//! against the manifest's own directory.
//!
//! ```yaml
//! projects:
//!   - id: app
//!     name: App
//!     packaging: jar
//!     source_directory: app/src/main/java
//!     output_directory: app/target/classes
//!     dependencies:
//!       - { project: lib, scope: compile }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tagcov_core::shared::models::Dependency;
use tagcov_core::{DependencyScope, Project, ProjectModel};
use tracing::debug;

use crate::error::ManifestError;

fn default_packaging() -> String {
    "jar".to_string()
}

/// One project entry as written in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestProject {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default = "default_packaging")]
    pub packaging: String,

    pub source_directory: PathBuf,

    pub output_directory: PathBuf,

    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl ManifestProject {
    fn resolve(self, base_dir: &Path) -> Project {
        let mut project = Project::new(
            self.id.clone(),
            base_dir.join(&self.source_directory),
            base_dir.join(&self.output_directory),
        )
        .with_name(self.name.unwrap_or(self.id))
        .with_packaging(self.packaging);
        project.dependencies = self.dependencies;
        project
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default)]
    projects: Vec<ManifestProject>,
}

/// Projects of one workspace, keyed by id
#[derive(Debug, Clone, Default)]
pub struct WorkspaceManifest {
    projects: BTreeMap<String, Project>,
}

impl WorkspaceManifest {
    /// Load from a YAML file; relative directories resolve against its parent
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_yaml_str(&content, base_dir)
    }

    pub fn from_yaml_str(content: &str, base_dir: &Path) -> Result<Self, ManifestError> {
        let file: ManifestFile = serde_yaml::from_str(content)?;
        Self::from_projects(file.projects, base_dir)
    }

    pub fn from_projects(
        entries: Vec<ManifestProject>,
        base_dir: &Path,
    ) -> Result<Self, ManifestError> {
        let mut projects = BTreeMap::new();
        for entry in entries {
            let project = entry.resolve(base_dir);
            if projects.contains_key(&project.id) {
                return Err(ManifestError::DuplicateProject(project.id));
            }
            projects.insert(project.id.clone(), project);
        }
        Ok(Self { projects })
    }

    pub fn project(&self, id: &str) -> Result<&Project, ManifestError> {
        self.projects
            .get(id)
            .ok_or_else(|| ManifestError::UnknownProject(id.to_string()))
    }

    /// Projects in id order
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectModel for WorkspaceManifest {
    fn dependency_projects(
        &self,
        project: &Project,
        scopes: &[DependencyScope],
    ) -> tagcov_core::Result<Vec<Project>> {
        Ok(project
            .dependencies
            .iter()
            .filter(|dependency| scopes.contains(&dependency.scope))
            .filter_map(|dependency| match self.projects.get(&dependency.project) {
                Some(found) => Some(found.clone()),
                None => {
                    debug!(
                        "Dependency {} of {} is not a workspace project",
                        dependency.project, project.id
                    );
                    None
                }
            })
            .collect())
    }
}
