//! File Filter Feature
//!
//! Default [`FileFilter`](crate::shared::ports::FileFilter) implementation:
//! walks the source root and keeps files matching the include globs and
//! none of the exclude globs.

pub mod glob;

pub use glob::{GlobFileFilter, GlobPattern};
