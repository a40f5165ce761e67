//! Author normalization

/// Truncates an author value at the earliest configured delimiter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorNormalizer {
    delimiters: Vec<String>,
}

impl AuthorNormalizer {
    /// Empty delimiters are dropped: they would match everywhere
    pub fn new<S: AsRef<str>>(delimiters: &[S]) -> Self {
        Self {
            delimiters: delimiters
                .iter()
                .map(|d| d.as_ref())
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Name part of a raw author value.
    ///
    /// `Alice/team1` → `Alice`. Returns `None` when nothing is left.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let cut = self
            .delimiters
            .iter()
            .filter_map(|d| raw.find(d.as_str()))
            .min()
            .unwrap_or(raw.len());

        let name = raw[..cut].trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_slash_delimiter() {
        let n = AuthorNormalizer::new(&["/"]);
        assert_eq!(n.normalize("Alice/team1").as_deref(), Some("Alice"));
        assert_eq!(n.normalize("Bob").as_deref(), Some("Bob"));
    }

    #[test]
    fn test_earliest_delimiter_wins() {
        let n = AuthorNormalizer::new(&["/", " "]);
        assert_eq!(n.normalize("Carol Smith/qa").as_deref(), Some("Carol"));
        assert_eq!(n.normalize("Dan/ops team").as_deref(), Some("Dan"));
    }

    #[test]
    fn test_multi_char_delimiter() {
        let n = AuthorNormalizer::new(&["<", " at "]);
        assert_eq!(n.normalize("Eve <eve@example.com>").as_deref(), Some("Eve"));
        assert_eq!(n.normalize("Frank at acme").as_deref(), Some("Frank"));
    }

    #[test]
    fn test_nothing_left_is_absent() {
        let n = AuthorNormalizer::new(&["/"]);
        assert_eq!(n.normalize("/team1"), None);
        assert_eq!(n.normalize(""), None);
    }

    #[test]
    fn test_empty_delimiter_is_ignored() {
        let n = AuthorNormalizer::new(&["", "/"]);
        assert_eq!(n.delimiters(), &["/".to_string()]);
        assert_eq!(n.normalize("Gina/dev").as_deref(), Some("Gina"));
    }

    #[test]
    fn test_non_ascii_name() {
        let n = AuthorNormalizer::new(&["/"]);
        assert_eq!(n.normalize("张三/研发部").as_deref(), Some("张三"));
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in "[a-zA-Z /,<>@.]{0,24}") {
            let n = AuthorNormalizer::new(&["/", " ", ","]);
            if let Some(once) = n.normalize(&raw) {
                prop_assert_eq!(n.normalize(&once), Some(once.clone()));
            }
        }
    }
}
