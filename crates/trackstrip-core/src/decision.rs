//! Keep/remove classification of tracks.

use crate::filter::FilterSpec;
use crate::language::normalize_language;
use crate::track::Track;
use std::collections::BTreeSet;

/// Tracks of one stream type split into kept and removed, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub kept: Vec<Track>,
    pub removed: Vec<Track>,
}

impl Partition {
    /// Languages of removed tracks, deduplicated and sorted.
    pub fn removed_languages(&self) -> Vec<&str> {
        self.removed
            .iter()
            .map(|t| t.language.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Languages of kept tracks in track order.
    pub fn kept_languages(&self) -> Vec<&str> {
        self.kept.iter().map(|t| t.language.as_str()).collect()
    }

    /// Zero-based indices of kept tracks, for stream mapping.
    pub fn kept_indices(&self) -> Vec<u32> {
        self.kept.iter().map(|t| t.index).collect()
    }

    /// True when no track was removed.
    pub fn is_untouched(&self) -> bool {
        self.removed.is_empty()
    }
}

/// A filter spec with its terms normalized, ready for matching.
struct Matcher<'a> {
    numbers: &'a [i64],
    languages: Vec<String>,
}

impl<'a> Matcher<'a> {
    fn new(spec: &'a FilterSpec) -> Self {
        Self {
            numbers: &spec.track_numbers,
            languages: spec.terms.iter().map(|t| normalize_language(t)).collect(),
        }
    }

    fn matches(&self, track: &Track) -> bool {
        self.numbers.contains(&i64::from(track.track_no))
            || self.languages.iter().any(|l| *l == track.language)
    }
}

enum Mode<'a> {
    Keep(Matcher<'a>),
    Remove(Matcher<'a>),
    KeepAll,
}

impl Mode<'_> {
    fn keeps(&self, track: &Track) -> bool {
        match self {
            Mode::Keep(matcher) => matcher.matches(track),
            Mode::Remove(matcher) => !matcher.matches(track),
            Mode::KeepAll => true,
        }
    }
}

/// Split `tracks` into kept and removed.
///
/// A non-empty keep spec wins outright: only matching tracks are kept and the
/// remove spec is ignored. Otherwise a non-empty remove spec removes matching
/// tracks. With neither, everything is kept.
///
/// # Examples
///
/// ```
/// use trackstrip_core::{classify, FilterSpec, Track};
///
/// let tracks = Track::from_tags([Some("eng"), Some("rus"), Some("deu")]);
/// let keep = FilterSpec::parse(Some("en"));
/// let partition = classify(&tracks, &keep, &FilterSpec::default());
///
/// assert_eq!(partition.kept_languages(), vec!["English"]);
/// assert_eq!(partition.removed.len(), 2);
/// ```
pub fn classify(tracks: &[Track], keep: &FilterSpec, remove: &FilterSpec) -> Partition {
    let mode = if !keep.is_empty() {
        Mode::Keep(Matcher::new(keep))
    } else if !remove.is_empty() {
        Mode::Remove(Matcher::new(remove))
    } else {
        Mode::KeepAll
    };

    let (kept, removed) = tracks.iter().cloned().partition(|t| mode.keeps(t));
    Partition { kept, removed }
}
