//! Stream layout types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use trackstrip_core::{StreamKind, Track};

/// Stream layout of a probed media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamLayout {
    /// Path to the media file.
    pub file_path: PathBuf,
    /// File size in bytes (0 when unknown).
    pub file_size: u64,
    /// Container format as reported by the prober (e.g. "matroska,webm").
    pub container: String,
    /// Number of video streams.
    pub video_streams: u32,
    /// Audio tracks in stream order.
    pub audio_tracks: Vec<Track>,
    /// Subtitle tracks in stream order.
    pub subtitle_tracks: Vec<Track>,
}

impl StreamLayout {
    /// Tracks of the given kind.
    pub fn tracks(&self, kind: StreamKind) -> &[Track] {
        match kind {
            StreamKind::Audio => &self.audio_tracks,
            StreamKind::Subtitle => &self.subtitle_tracks,
        }
    }

    /// Whether the file has at least one video stream.
    pub fn has_video(&self) -> bool {
        self.video_streams > 0
    }
}
