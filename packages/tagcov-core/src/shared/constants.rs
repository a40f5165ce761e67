//! Default option values and naming conventions

/// Default documentation tag for the creation date
pub const DEFAULT_DATE_TAG: &str = "date";

/// Default documentation tag for the author
pub const DEFAULT_AUTHOR_TAG: &str = "author";

/// Default date patterns, tried in order
pub const DEFAULT_DATE_PATTERNS: &[&str] = &["yyyy/M/d", "yyyy-M-d", "yyyy年M月d日"];

/// Default author delimiters
pub const DEFAULT_AUTHOR_DELIMITERS: &[&str] = &["/"];

/// Include everything below the source root
pub const DEFAULT_INCLUDE: &str = "**";

pub const DEFAULT_SOURCE_ENCODING: &str = "UTF-8";

pub const DEFAULT_SOURCE_SUFFIX: &str = ".java";

pub const DEFAULT_ARTIFACT_SUFFIX: &str = ".class";

/// Separator between an enclosing type and its nested/anonymous types in
/// compiled artifact names (`Foo$1.class`, `Foo$Bar.class`)
pub const NESTED_ARTIFACT_SEPARATOR: char = '$';

/// Packaging of a project that only aggregates other projects
pub const AGGREGATOR_PACKAGING: &str = "pom";
