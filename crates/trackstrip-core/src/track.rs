//! Probed audio/subtitle track model.

use crate::language::{normalize_tag, UNDETERMINED_TAG};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of stream a filter applies to. Video is never filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    Audio,
    Subtitle,
}

impl StreamKind {
    /// Stream specifier letter used by ffmpeg's `-map 0:<letter>:<n>`.
    pub fn specifier(&self) -> char {
        match self {
            StreamKind::Audio => 'a',
            StreamKind::Subtitle => 's',
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Audio => write!(f, "audio"),
            StreamKind::Subtitle => write!(f, "subtitles"),
        }
    }
}

/// One audio or subtitle stream of a probed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Zero-based index among streams of the same kind.
    pub index: u32,
    /// One-based track number shown to and typed by users.
    pub track_no: u32,
    /// Normalized display language.
    pub language: String,
    /// Language tag as found in the container (`und` when missing).
    pub raw_language: String,
}

impl Track {
    /// Build a track from its type-relative index and raw language tag.
    pub fn new(index: u32, raw_language: Option<&str>) -> Self {
        Self {
            index,
            track_no: index + 1,
            language: normalize_tag(raw_language),
            raw_language: raw_language.unwrap_or(UNDETERMINED_TAG).to_string(),
        }
    }

    /// Build the track list for a sequence of raw tags, indexing in order.
    pub fn from_tags<'a, I>(tags: I) -> Vec<Self>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        tags.into_iter()
            .zip(0u32..)
            .map(|(tag, index)| Self::new(index, tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_track() {
        let track = Track::new(0, Some("eng"));
        assert_eq!(track.index, 0);
        assert_eq!(track.track_no, 1);
        assert_eq!(track.language, "English");
        assert_eq!(track.raw_language, "eng");
    }

    #[test]
    fn test_missing_language_uses_sentinel() {
        let track = Track::new(3, None);
        assert_eq!(track.track_no, 4);
        assert_eq!(track.language, "Undetermined");
        assert_eq!(track.raw_language, "und");
    }

    #[test]
    fn test_from_tags_numbers_per_kind() {
        let tracks = Track::from_tags([Some("eng"), None, Some("jpn")]);
        let numbers: Vec<u32> = tracks.iter().map(|t| t.track_no).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(tracks[2].index, 2);
        assert_eq!(tracks[2].language, "Japanese");
    }

    #[test]
    fn test_stream_kind_display() {
        assert_eq!(StreamKind::Audio.to_string(), "audio");
        assert_eq!(StreamKind::Subtitle.to_string(), "subtitles");
        assert_eq!(StreamKind::Subtitle.specifier(), 's');
    }
}
