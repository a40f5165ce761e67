//! In-memory report tree
//!
//! [`ReportTree`] is the group visitor handed to the engine. Every opened
//! group becomes a [`ReportNode`]; bundles land on the node that was open
//! when they arrived. The finished tree is rendered as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tagcov_core::{ArtifactBundle, ReportGroupVisitor, ReportSummary, Result};

/// One named report group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportNode {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<ReportNode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundles: Vec<ArtifactBundle>,
}

impl ReportNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn child(&self, name: &str) -> Option<&ReportNode> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Descendant reached by following `path` from this node
    pub fn find(&self, path: &[&str]) -> Option<&ReportNode> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    pub fn bundle(&self, name: &str) -> Option<&ArtifactBundle> {
        self.bundles.iter().find(|b| b.name == name)
    }

    /// Artifacts in this node and all descendants
    pub fn artifact_count(&self) -> usize {
        self.bundles.iter().map(|b| b.artifacts.len()).sum::<usize>()
            + self.groups.iter().map(ReportNode::artifact_count).sum::<usize>()
    }

    fn open(&mut self, name: &str) -> &mut ReportNode {
        let index = self.groups.len();
        self.groups.push(ReportNode::new(name));
        &mut self.groups[index]
    }
}

/// Root of the report; has no name of its own
#[derive(Debug, Clone, Default)]
pub struct ReportTree {
    root: ReportNode,
}

impl ReportTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level groups in the order they were opened
    pub fn groups(&self) -> &[ReportNode] {
        &self.root.groups
    }

    pub fn find(&self, path: &[&str]) -> Option<&ReportNode> {
        self.root.find(path)
    }

    pub fn into_groups(self) -> Vec<ReportNode> {
        self.root.groups
    }
}

struct GroupCursor<'a> {
    node: &'a mut ReportNode,
}

impl ReportGroupVisitor for ReportTree {
    fn visit_group(&mut self, name: &str) -> Result<Box<dyn ReportGroupVisitor + '_>> {
        Ok(Box::new(GroupCursor {
            node: self.root.open(name),
        }))
    }

    fn visit_bundle(&mut self, bundle: ArtifactBundle) -> Result<()> {
        self.root.bundles.push(bundle);
        Ok(())
    }
}

impl ReportGroupVisitor for GroupCursor<'_> {
    fn visit_group(&mut self, name: &str) -> Result<Box<dyn ReportGroupVisitor + '_>> {
        Ok(Box::new(GroupCursor {
            node: self.node.open(name),
        }))
    }

    fn visit_bundle(&mut self, bundle: ArtifactBundle) -> Result<()> {
        self.node.bundles.push(bundle);
        Ok(())
    }
}

/// Per-project figures in the rendered report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub project: String,
    pub source_files: usize,
    pub tagged_files: usize,
    pub artifacts: usize,
    pub elapsed_ms: u64,
}

/// Rendered report: run figures plus the group tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub elapsed_ms: u64,
    pub projects: Vec<ProjectStats>,
    pub groups: Vec<ReportNode>,
}

impl ReportDocument {
    pub fn new(summary: &ReportSummary, tree: ReportTree) -> Self {
        let projects = summary
            .projects
            .iter()
            .map(|report| ProjectStats {
                project: report.project.clone(),
                source_files: report.source_files,
                tagged_files: report.tagged_files,
                artifacts: report.grouped.file_count(),
                elapsed_ms: report.elapsed.as_millis() as u64,
            })
            .collect();

        Self {
            title: summary.title.clone(),
            elapsed_ms: summary.elapsed.as_millis() as u64,
            projects,
            groups: tree.into_groups(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_json(&self, path: &Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn bundle(name: &str, files: &[&str]) -> ArtifactBundle {
        ArtifactBundle {
            name: name.to_string(),
            project: "app".to_string(),
            artifacts: files.iter().map(PathBuf::from).collect(),
            source_encoding: "UTF-8".to_string(),
        }
    }

    #[test]
    fn test_nested_groups_collect_bundles() {
        let mut tree = ReportTree::new();
        {
            let mut top = tree.visit_group("App").unwrap();
            {
                let mut march = top.visit_group("2024年03月").unwrap();
                march.visit_bundle(bundle("Alice", &["A.class", "A$1.class"])).unwrap();
                march.visit_bundle(bundle("Bob", &["B.class"])).unwrap();
            }
            let mut april = top.visit_group("2024年04月").unwrap();
            april.visit_bundle(bundle("Alice", &["C.class"])).unwrap();
        }

        assert_eq!(tree.groups().len(), 1);
        let app = &tree.groups()[0];
        assert_eq!(app.artifact_count(), 4);
        assert_eq!(
            tree.find(&["App", "2024年03月"]).unwrap().bundle("Bob").unwrap().artifacts,
            vec![PathBuf::from("B.class")]
        );
        assert!(tree.find(&["App", "2024年05月"]).is_none());
    }

    #[test]
    fn test_json_shape() {
        let mut tree = ReportTree::new();
        {
            let mut top = tree.visit_group("App").unwrap();
            top.visit_bundle(bundle("Alice", &["A.class"])).unwrap();
        }

        let json = serde_json::to_value(tree.groups()).unwrap();
        assert_eq!(json[0]["name"], "App");
        assert_eq!(json[0]["bundles"][0]["artifacts"][0], "A.class");
        assert!(json[0].get("groups").is_none());
    }
}
