//! Report orchestration: single project, aggregate mode, group layout

mod common;

use std::path::PathBuf;
use std::sync::Arc;

use common::*;
use pretty_assertions::assert_eq;
use tagcov_core::pipeline::BundleReportSupport;
use tagcov_core::{DependencyScope, Project, ProjectOrchestrator, ReportConfig};
use tempfile::TempDir;

fn orchestrator(config: ReportConfig, projects: Vec<Project>) -> ProjectOrchestrator {
    ProjectOrchestrator::from_config(config, Arc::new(MapProjectModel::new(projects))).unwrap()
}

fn compiled(module: &FixtureModule, name: &str, date: &str, author: &str) -> PathBuf {
    module.source_file(&format!("com/acme/{name}.java"), &java_class(name, date, author));
    module.artifact(&format!("com/acme/{name}.class"))
}

#[test]
fn test_single_project_layout() {
    let fixture = FixtureProject::new("app");
    let foo = fixture.compiled_class("Foo", "2024/3/15", "Alice/team1");
    let bar = fixture.compiled_class("Bar", "2024/4/2", "Bob");
    let project = fixture.project().with_name("Application");

    let mut visitor = RecordingVisitor::new();
    let summary = orchestrator(ReportConfig::default(), vec![])
        .create_report(&project, &mut visitor, &BundleReportSupport)
        .unwrap();

    assert_eq!(summary.title, "Application");
    assert_eq!(
        visitor.group_paths(),
        vec![
            "Application",
            "Application / 2024年03月",
            "Application / 2024年04月",
        ]
    );

    let alice = visitor.bundle(&["Application", "2024年03月"], "Alice").unwrap();
    assert_eq!(alice.artifacts, vec![foo]);
    assert_eq!(alice.project, "app");
    assert_eq!(alice.source_encoding, "UTF-8");

    let bob = visitor.bundle(&["Application", "2024年04月"], "Bob").unwrap();
    assert_eq!(bob.artifacts, vec![bar]);
    assert_eq!(summary.artifact_count(), 2);
}

#[test]
fn test_title_and_encoding_from_config() {
    let fixture = FixtureProject::new("app");
    fixture.compiled_class("Foo", "2024/3/15", "Alice");

    let config = ReportConfig::default()
        .with_title("Release 7")
        .with_source_encoding("ISO-8859-1");
    let mut visitor = RecordingVisitor::new();
    orchestrator(config, vec![])
        .create_report(&fixture.project(), &mut visitor, &BundleReportSupport)
        .unwrap();

    let bundle = visitor.bundle(&["Release 7", "2024年03月"], "Alice").unwrap();
    assert_eq!(bundle.source_encoding, "ISO-8859-1");
}

#[test]
fn test_pom_root_reports_reported_scopes_only() {
    let tmp = TempDir::new().unwrap();
    let core = FixtureModule::new(tmp.path(), "core");
    let web = FixtureModule::new(tmp.path(), "web");
    let tests = FixtureModule::new(tmp.path(), "it");
    compiled(&core, "Engine", "2024/3/1", "Alice");
    compiled(&web, "Controller", "2024/3/9", "Bob");
    compiled(&tests, "Suite", "2024/3/9", "Carol");

    let parent = Project::new("parent", tmp.path().join("none"), tmp.path().join("none"))
        .with_packaging("pom")
        .with_dependency("core", DependencyScope::Compile)
        .with_dependency("web", DependencyScope::Runtime)
        .with_dependency("it", DependencyScope::Test);

    let mut visitor = RecordingVisitor::new();
    let summary = orchestrator(
        ReportConfig::default(),
        vec![core.project(), web.project(), tests.project()],
    )
    .create_report(&parent, &mut visitor, &BundleReportSupport)
    .unwrap();

    assert_eq!(
        summary.projects.iter().map(|p| p.project.as_str()).collect::<Vec<_>>(),
        vec!["core", "web"]
    );
    assert!(visitor.bundle(&["parent", "core", "2024年03月"], "Alice").is_some());
    assert!(visitor.bundle(&["parent", "web", "2024年03月"], "Bob").is_some());
    assert!(summary.project("it").is_none());
}

#[test]
fn test_nested_pom_dependencies_expand_once() {
    let tmp = TempDir::new().unwrap();
    let lib = FixtureModule::new(tmp.path(), "lib");
    compiled(&lib, "Util", "2024/5/5", "Dana");

    let none = tmp.path().join("none");
    let services = Project::new("services", &none, &none)
        .with_packaging("pom")
        .with_dependency("lib", DependencyScope::Compile);
    let root = Project::new("root", &none, &none)
        .with_packaging("pom")
        .with_dependency("services", DependencyScope::Compile)
        .with_dependency("lib", DependencyScope::Provided);

    let mut visitor = RecordingVisitor::new();
    let summary = orchestrator(ReportConfig::default(), vec![services, lib.project()])
        .create_report(&root, &mut visitor, &BundleReportSupport)
        .unwrap();

    assert_eq!(summary.projects.len(), 1);
    assert!(visitor
        .bundle(&["root", "services", "lib", "2024年05月"], "Dana")
        .is_some());
    assert!(!visitor.group_paths().contains(&"root / lib".to_string()));
}

#[test]
fn test_aggregate_flag_on_jar_project() {
    let tmp = TempDir::new().unwrap();
    let lib = FixtureModule::new(tmp.path(), "lib");
    compiled(&lib, "Util", "2024/5/5", "Dana");
    let app = FixtureModule::new(tmp.path(), "app");
    compiled(&app, "Main", "2024/5/6", "Eve");
    let root = app.project().with_dependency("lib", DependencyScope::Compile);

    let mut visitor = RecordingVisitor::new();
    let summary = orchestrator(
        ReportConfig::default().with_aggregate_projects(true),
        vec![lib.project()],
    )
    .create_report(&root, &mut visitor, &BundleReportSupport)
    .unwrap();

    // only the dependencies are reported, not the root's own sources
    assert_eq!(summary.projects.len(), 1);
    assert_eq!(summary.projects[0].project, "lib");
    assert!(visitor.bundle(&["app", "lib", "2024年05月"], "Dana").is_some());
}

#[test]
fn test_project_model_failure_is_fatal() {
    let parent = Project::new("parent", "none", "none").with_packaging("pom");
    let orchestrator =
        ProjectOrchestrator::from_config(ReportConfig::default(), Arc::new(BrokenProjectModel))
            .unwrap();

    let mut visitor = RecordingVisitor::new();
    let err = orchestrator
        .create_report(&parent, &mut visitor, &BundleReportSupport)
        .unwrap_err();

    assert!(err.to_string().contains("dependency graph unavailable"));
}
