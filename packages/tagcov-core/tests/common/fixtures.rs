//! On-disk project fixtures

use std::fs;
use std::path::{Path, PathBuf};

use tagcov_core::Project;
use tempfile::TempDir;

/// Java class documented with the given date and author
pub fn java_class(name: &str, date: &str, author: &str) -> String {
    format!(
        "package com.acme;\n\n/**\n * {name} service.\n *\n * @author {author}\n * @date {date}\n */\npublic class {name} {{\n    void run() {{}}\n}}\n"
    )
}

/// Java class with a documentation comment but no tags
pub fn java_class_untagged(name: &str) -> String {
    format!("package com.acme;\n\n/** {name}. */\npublic class {name} {{}}\n")
}

/// Java class with only an author tag
pub fn java_class_author_only(name: &str, author: &str) -> String {
    format!("package com.acme;\n\n/**\n * @author {author}\n */\npublic class {name} {{}}\n")
}

/// Source and output tree of one project, below a base directory
#[derive(Debug, Clone)]
pub struct FixtureModule {
    pub id: String,
    pub source: PathBuf,
    pub output: PathBuf,
}

impl FixtureModule {
    pub fn new(base: &Path, id: &str) -> Self {
        let source = base.join(id).join("src/main/java");
        let output = base.join(id).join("target/classes");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&output).unwrap();
        Self {
            id: id.to_string(),
            source,
            output,
        }
    }

    /// Write a source file relative to the source root
    pub fn source_file(&self, relative: &str, content: &str) -> PathBuf {
        write(&self.source.join(relative), content.as_bytes())
    }

    /// Create an (empty) artifact relative to the output root
    pub fn artifact(&self, relative: &str) -> PathBuf {
        write(&self.output.join(relative), b"\xCA\xFE\xBA\xBE")
    }

    pub fn project(&self) -> Project {
        Project::new(self.id.clone(), &self.source, &self.output)
    }
}

/// Single-module fixture owning its temp dir
pub struct FixtureProject {
    pub dir: TempDir,
    pub module: FixtureModule,
}

impl FixtureProject {
    pub fn new(id: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let module = FixtureModule::new(dir.path(), id);
        Self { dir, module }
    }

    /// Source `com/acme/<name>.java` plus artifact `com/acme/<name>.class`
    pub fn compiled_class(&self, name: &str, date: &str, author: &str) -> PathBuf {
        self.module
            .source_file(&format!("com/acme/{name}.java"), &java_class(name, date, author));
        self.module.artifact(&format!("com/acme/{name}.class"))
    }

    pub fn project(&self) -> Project {
        self.module.project()
    }
}

fn write(path: &Path, content: &[u8]) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
    path.to_path_buf()
}
