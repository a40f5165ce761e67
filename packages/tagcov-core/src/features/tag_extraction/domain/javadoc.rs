//! Javadoc block tag model
//!
//! A block tag starts on a line whose first character after the leading
//! whitespace and the optional `*` is `@`. Its content runs until the next
//! block tag or the end of the comment.

/// One `@name content` block tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTag {
    pub name: String,
    pub content: String,
}

impl BlockTag {
    fn open(section: &str) -> Self {
        let (name, rest) = match section.find(char::is_whitespace) {
            Some(idx) => section.split_at(idx),
            None => (section, ""),
        };
        Self {
            name: name.to_string(),
            content: rest.to_string(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }

    fn finish(mut self) -> Self {
        self.content = self.content.trim().to_string();
        self
    }
}

/// Parse the block tags of a `/** ... */` comment, in declaration order
pub fn parse_block_tags(comment: &str) -> Vec<BlockTag> {
    let body = comment.strip_prefix("/**").unwrap_or(comment);
    let body = body.strip_suffix("*/").unwrap_or(body);

    let mut tags = Vec::new();
    let mut current: Option<BlockTag> = None;

    for raw_line in body.lines() {
        let line = strip_leading_asterisk(raw_line);
        if let Some(section) = line.trim_start().strip_prefix('@') {
            if let Some(tag) = current.take() {
                tags.push(tag.finish());
            }
            current = Some(BlockTag::open(section));
        } else if let Some(tag) = current.as_mut() {
            tag.push_line(line);
        }
        // lines before the first tag are description text
    }

    if let Some(tag) = current {
        tags.push(tag.finish());
    }
    tags
}

/// Drop leading whitespace, one `*` and one blank after it
fn strip_leading_asterisk(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest
            .strip_prefix(' ')
            .or_else(|| rest.strip_prefix('\t'))
            .unwrap_or(rest),
        None => line,
    }
}
