//! Date normalization
//!
//! Patterns use the `SimpleDateFormat` letters found in build configuration
//! (`yyyy/M/d`, `yyyy年M月d日`) and are compiled once into `chrono` format
//! strings. A compiled pattern is an immutable value, so one
//! [`DateNormalizer`] is shared by every worker.

use std::fmt;

use chrono::NaiveDate;
use tracing::warn;

/// Canonical `yyyyMMdd` date.
///
/// Fixed width, so string order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedDate(String);

impl NormalizedDate {
    fn from_date(date: NaiveDate) -> Option<Self> {
        let canonical = date.format("%Y%m%d").to_string();
        (canonical.len() == 8).then_some(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First-level grouping key, e.g. `2024年03月`
    pub fn period_key(&self) -> String {
        format!("{}年{}月", &self.0[0..4], &self.0[4..6])
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One compiled date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    format: String,
    whitespace_runs: usize,
}

impl DatePattern {
    /// Compile a `SimpleDateFormat`-style pattern.
    ///
    /// Supported letters: `y` (year), `M` (month), `d` (day). Any other
    /// ASCII letter makes the pattern unusable and yields `None`.
    pub fn compile(pattern: &str) -> Option<Self> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut format = String::with_capacity(pattern.len() + 4);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c == '\'' {
                // quoted literal, '' is a single quote
                if chars.get(i + 1) == Some(&'\'') {
                    format.push('\'');
                    i += 2;
                    continue;
                }
                i += 1;
                while i < chars.len() {
                    if chars[i] == '\'' {
                        if chars.get(i + 1) == Some(&'\'') {
                            format.push('\'');
                            i += 2;
                            continue;
                        }
                        break;
                    }
                    push_literal(&mut format, chars[i]);
                    i += 1;
                }
                i += 1;
                continue;
            }

            if c.is_ascii_alphabetic() {
                let run = chars[i..].iter().take_while(|&&ch| ch == c).count();
                let directive = match (c, run) {
                    ('y', 2) => "%y",
                    ('y', _) => "%Y",
                    ('M', 1..=2) => "%m",
                    ('M', 3) => "%b",
                    ('M', _) => "%B",
                    ('d', 1..=2) => "%d",
                    _ => return None,
                };
                format.push_str(directive);
                i += run;
                continue;
            }

            push_literal(&mut format, c);
            i += 1;
        }

        Some(Self {
            source: pattern.to_string(),
            whitespace_runs: whitespace_runs(&format),
            format,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parse the whole input, or nothing.
    ///
    /// Every whitespace run in the pattern needs a whitespace run in the
    /// input; chrono alone would let a space match nothing.
    pub fn parse(&self, input: &str) -> Option<NaiveDate> {
        if whitespace_runs(input) < self.whitespace_runs {
            return None;
        }
        NaiveDate::parse_from_str(input, &self.format).ok()
    }
}

fn whitespace_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        let ws = c.is_whitespace();
        if ws && !in_run {
            runs += 1;
        }
        in_run = ws;
    }
    runs
}

fn push_literal(format: &mut String, c: char) {
    if c == '%' {
        format.push_str("%%");
    } else {
        format.push(c);
    }
}

/// Ordered list of date patterns; first match wins
#[derive(Debug, Clone, Default)]
pub struct DateNormalizer {
    patterns: Vec<DatePattern>,
}

impl DateNormalizer {
    /// Compile the given patterns, dropping (and warning about) unusable ones
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|p| {
                let p = p.as_ref();
                let compiled = DatePattern::compile(p);
                if compiled.is_none() {
                    warn!("Unsupported date pattern ignored: {}", p);
                }
                compiled
            })
            .collect();
        Self { patterns }
    }

    pub fn patterns(&self) -> &[DatePattern] {
        &self.patterns
    }

    /// Normalize a raw date value. Empty or unmatched input gives `None`.
    pub fn normalize(&self, raw: &str) -> Option<NormalizedDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        self.patterns
            .iter()
            .find_map(|p| p.parse(raw))
            .and_then(NormalizedDate::from_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::DEFAULT_DATE_PATTERNS;

    fn normalizer() -> DateNormalizer {
        DateNormalizer::new(DEFAULT_DATE_PATTERNS)
    }

    #[test]
    fn test_default_patterns() {
        let n = normalizer();
        assert_eq!(n.normalize("2024/3/15").unwrap().as_str(), "20240315");
        assert_eq!(n.normalize("2024-04-01").unwrap().as_str(), "20240401");
        assert_eq!(n.normalize("2021年6月10日").unwrap().as_str(), "20210610");
    }

    #[test]
    fn test_period_key() {
        let date = normalizer().normalize("2024/3/15").unwrap();
        assert_eq!(date.period_key(), "2024年03月");
    }

    #[test]
    fn test_empty_and_unmatched() {
        let n = normalizer();
        assert!(n.normalize("").is_none());
        assert!(n.normalize("   ").is_none());
        assert!(n.normalize("15.03.2024").is_none());
        assert!(n.normalize("2024/3/15 by Alice").is_none());
    }

    #[test]
    fn test_impossible_date_does_not_match() {
        // calendar-invalid dates are rejected, never rolled over
        assert!(normalizer().normalize("2024/13/1").is_none());
        assert!(normalizer().normalize("2023/2/29").is_none());
        assert!(normalizer().normalize("2024/2/30").is_none());
    }

    #[test]
    fn test_pattern_space_requires_input_space() {
        let pattern = DatePattern::compile("yyyy M d").unwrap();
        assert!(pattern.parse("2024115").is_none());
        assert_eq!(
            pattern.parse("2024 11 5"),
            NaiveDate::from_ymd_opt(2024, 11, 5)
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            normalizer().normalize("  2024/3/15\n").unwrap().as_str(),
            "20240315"
        );
    }

    #[test]
    fn test_first_matching_pattern_wins() {
        // dd/MM/yyyy before yyyy/M/d: "01/02/2024" is the 1st of February
        let n = DateNormalizer::new(&["dd/MM/yyyy", "yyyy/M/d"]);
        assert_eq!(n.normalize("01/02/2024").unwrap().as_str(), "20240201");
        assert_eq!(n.normalize("2024/2/1").unwrap().as_str(), "20240201");
    }

    #[test]
    fn test_quoted_literals() {
        let pattern = DatePattern::compile("yyyy'T'MM'-'dd").unwrap();
        assert!(pattern.parse("2024T03-15").is_some());
    }

    #[test]
    fn test_unsupported_pattern_is_dropped() {
        let n = DateNormalizer::new(&["yyyy-MM-dd HH:mm", "yyyy-M-d"]);
        assert_eq!(n.patterns().len(), 1);
        assert_eq!(n.patterns()[0].source(), "yyyy-M-d");
    }

    #[test]
    fn test_canonical_order_is_chronological() {
        let n = normalizer();
        let earlier = n.normalize("2024/3/31").unwrap();
        let later = n.normalize("2024-4-1").unwrap();
        assert!(earlier < later);
    }
}
