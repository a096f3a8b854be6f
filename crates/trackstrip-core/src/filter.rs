//! Parsing of comma-separated filter expressions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A keep-list or remove-list for one stream type.
///
/// Segments that parse as integers are track numbers (one-based); everything
/// else is a language term, matched after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Track numbers, ascending.
    pub track_numbers: Vec<i64>,
    /// Language terms, longest first then case-insensitive alphabetical.
    pub terms: Vec<String>,
}

impl FilterSpec {
    /// Parse a comma-separated expression such as `"eng, 2, Japanese"`.
    ///
    /// `None` and empty input produce an empty spec. Empty segments are
    /// dropped; duplicates are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use trackstrip_core::FilterSpec;
    ///
    /// let spec = FilterSpec::parse(Some("3, en, 1,,japanese"));
    /// assert_eq!(spec.track_numbers, vec![1, 3]);
    /// assert_eq!(spec.terms, vec!["japanese", "en"]);
    /// ```
    pub fn parse(raw: Option<&str>) -> Self {
        let mut spec = Self::default();
        let Some(raw) = raw else {
            return spec;
        };

        for segment in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match segment.parse::<i64>() {
                Ok(number) => spec.track_numbers.push(number),
                Err(_) => spec.terms.push(segment.to_string()),
            }
        }

        spec.track_numbers.sort_unstable();
        spec.terms.sort_by(|a, b| compare_terms(a, b));
        spec
    }

    /// True when neither track numbers nor terms are present.
    pub fn is_empty(&self) -> bool {
        self.track_numbers.is_empty() && self.terms.is_empty()
    }

    /// Whether `term` is present, ignoring case.
    pub fn contains_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.terms.iter().any(|t| t.to_lowercase() == term)
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .track_numbers
            .iter()
            .map(|n| n.to_string())
            .chain(self.terms.iter().cloned())
            .collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Longer terms first, ties broken case-insensitively.
fn compare_terms(a: &str, b: &str) -> Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_none_and_empty() {
        assert!(FilterSpec::parse(None).is_empty());
        assert!(FilterSpec::parse(Some("")).is_empty());
        assert!(FilterSpec::parse(Some(" , ,, ")).is_empty());
    }

    #[test]
    fn test_parse_splits_numbers_and_terms() {
        let spec = FilterSpec::parse(Some("eng, 2 ,fre,1"));
        assert_eq!(spec.track_numbers, vec![1, 2]);
        assert_eq!(spec.terms, vec!["eng", "fre"]);
    }

    #[test]
    fn test_term_ordering() {
        let spec = FilterSpec::parse(Some("en,Russian,ja,english,De,fre"));
        assert_eq!(
            spec.terms,
            vec!["english", "Russian", "fre", "De", "en", "ja"]
        );
    }

    #[test]
    fn test_numbers_sorted_without_validation() {
        let spec = FilterSpec::parse(Some("10,-1,+3,0"));
        assert_eq!(spec.track_numbers, vec![-1, 0, 3, 10]);
        assert!(spec.terms.is_empty());
    }

    #[test]
    fn test_duplicates_are_preserved() {
        // Duplicate segments are kept as-is rather than deduplicated.
        let spec = FilterSpec::parse(Some("2,en,2,EN"));
        assert_eq!(spec.track_numbers, vec![2, 2]);
        assert_eq!(spec.terms, vec!["en", "EN"]);
    }

    #[test]
    fn test_non_numeric_segments_become_terms() {
        let spec = FilterSpec::parse(Some("1.5,2a,zh-cn"));
        assert!(spec.track_numbers.is_empty());
        assert_eq!(spec.terms, vec!["zh-cn", "1.5", "2a"]);
    }

    #[test]
    fn test_only_plain_i64_segments_are_track_numbers() {
        // Digit separators, non-ASCII digits and out-of-range values stay terms.
        let spec = FilterSpec::parse(Some("1_0,99999999999999999999,\u{0663}"));
        assert!(spec.track_numbers.is_empty());
        assert_eq!(spec.terms.len(), 3);
        assert!(spec.contains_term("1_0"));
        assert!(spec.contains_term("\u{0663}"));
    }

    #[test]
    fn test_contains_term_ignores_case() {
        let spec = FilterSpec::parse(Some("Russian"));
        assert!(spec.contains_term("russian"));
        assert!(!spec.contains_term("rus"));
    }

    #[test]
    fn test_display() {
        let spec = FilterSpec::parse(Some("en,2,1"));
        assert_eq!(spec.to_string(), "1,2,en");
        assert_eq!(FilterSpec::default().to_string(), "");
    }
}
