pub mod comment_tags;
pub mod javadoc;

pub use comment_tags::CommentTags;
pub use javadoc::{parse_block_tags, BlockTag};
