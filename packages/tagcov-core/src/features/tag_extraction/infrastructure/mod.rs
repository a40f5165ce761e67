/// Tag Extraction Infrastructure
pub mod error;
pub mod java_comments;

pub use error::*;
pub use java_comments::*;
