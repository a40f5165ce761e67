//! Tags found in a source file's documentation comments

/// Raw date and author values of one source file.
///
/// `None` means the tag was never seen. A tag that was seen with an empty
/// value is kept as `Some("")` so it still blocks later comments from
/// supplying it, but counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentTags {
    pub date: Option<String>,
    pub author: Option<String>,
}

impl CommentTags {
    pub fn new(date: Option<String>, author: Option<String>) -> Self {
        Self { date, author }
    }

    /// Both tags absent (file could not be read)
    pub fn absent() -> Self {
        Self::default()
    }

    /// Both tags have been seen, possibly with empty values
    pub fn is_settled(&self) -> bool {
        self.date.is_some() && self.author.is_some()
    }

    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    pub fn author(&self) -> Option<&str> {
        non_empty(&self.author)
    }

    /// Names of the tags that are absent or empty
    pub fn missing<'a>(&self, date_tag: &'a str, author_tag: &'a str) -> Vec<&'a str> {
        let mut missing = Vec::new();
        if self.date().is_none() {
            missing.push(date_tag);
        }
        if self.author().is_none() {
            missing.push(author_tag);
        }
        missing
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
