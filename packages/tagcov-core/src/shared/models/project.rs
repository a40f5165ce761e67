//! Project handles
//!
//! A [`Project`] is what the project model hands back: where the sources
//! live, where the build writes its artifacts, and which other projects it
//! depends on.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::constants::AGGREGATOR_PACKAGING;

/// Dependency scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    Compile,
    Runtime,
    Provided,
    Test,
    System,
    Import,
}

impl DependencyScope {
    /// Scopes whose projects end up in the aggregated report
    pub const REPORTED: [DependencyScope; 3] = [
        DependencyScope::Compile,
        DependencyScope::Runtime,
        DependencyScope::Provided,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyScope::Compile => "compile",
            DependencyScope::Runtime => "runtime",
            DependencyScope::Provided => "provided",
            DependencyScope::Test => "test",
            DependencyScope::System => "system",
            DependencyScope::Import => "import",
        }
    }
}

impl Default for DependencyScope {
    fn default() -> Self {
        DependencyScope::Compile
    }
}

impl FromStr for DependencyScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compile" => Ok(DependencyScope::Compile),
            "runtime" => Ok(DependencyScope::Runtime),
            "provided" => Ok(DependencyScope::Provided),
            "test" => Ok(DependencyScope::Test),
            "system" => Ok(DependencyScope::System),
            "import" => Ok(DependencyScope::Import),
            other => Err(format!("Unknown dependency scope: {}", other)),
        }
    }
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Edge from a project to one of its dependency projects
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    /// Id of the depended-on project
    pub project: String,

    #[serde(default)]
    pub scope: DependencyScope,
}

/// Project handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Artifact id, unique within a workspace
    pub id: String,

    /// Display name (falls back to the id)
    pub name: String,

    /// Packaging type (`jar`, `war`, `pom`, ...)
    pub packaging: String,

    pub source_directory: PathBuf,

    pub output_directory: PathBuf,

    pub dependencies: Vec<Dependency>,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        source_directory: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            packaging: "jar".to_string(),
            source_directory: source_directory.into(),
            output_directory: output_directory.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = packaging.into();
        self
    }

    pub fn with_dependency(mut self, project: impl Into<String>, scope: DependencyScope) -> Self {
        self.dependencies.push(Dependency {
            project: project.into(),
            scope,
        });
        self
    }

    /// True when the project exists only to group other projects
    pub fn is_aggregator(&self) -> bool {
        self.packaging.eq_ignore_ascii_case(AGGREGATOR_PACKAGING)
    }
}
