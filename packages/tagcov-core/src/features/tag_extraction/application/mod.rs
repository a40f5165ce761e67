pub mod extract_tags;

pub use extract_tags::TagExtractor;
