//! User-facing summaries of what a run removes and keeps.

use trackstrip_av::{CopyProgress, RunStats, StreamLayout};
use trackstrip_core::Partition;

/// Kept/removed partitions for both stream kinds of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePlan {
    pub audio: Partition,
    pub subtitles: Partition,
}

impl FilePlan {
    /// True when the plan drops no track at all.
    pub fn is_untouched(&self) -> bool {
        self.audio.is_untouched() && self.subtitles.is_untouched()
    }
}

/// `Removing audio: A, B; subtitles: C`, or `None` when nothing is removed.
///
/// Languages are deduplicated and sorted per stream kind.
pub fn removal_summary(plan: &FilePlan) -> Option<String> {
    let parts = labelled(
        plan.audio.removed_languages(),
        plan.subtitles.removed_languages(),
    );
    (!parts.is_empty()).then(|| format!("Removing {}", parts.join("; ")))
}

/// `Remaining audio: A, B; subtitles: C` in track order.
pub fn remaining_summary(plan: &FilePlan) -> String {
    let parts = labelled(plan.audio.kept_languages(), plan.subtitles.kept_languages());
    format!("Remaining {}", parts.join("; ")).trim_end().to_string()
}

fn labelled(audio: Vec<&str>, subtitles: Vec<&str>) -> Vec<String> {
    let mut parts = Vec::new();
    if !audio.is_empty() {
        parts.push(format!("audio: {}", audio.join(", ")));
    }
    if !subtitles.is_empty() {
        parts.push(format!("subtitles: {}", subtitles.join(", ")));
    }
    parts
}

/// Single progress line, meant to be redrawn in place.
pub fn progress_line(progress: &CopyProgress) -> String {
    let eta = progress
        .eta()
        .map(|d| format!("{}s", d.as_secs()))
        .unwrap_or_else(|| "?".to_string());
    format!(
        "Progress: {:.0}% ({:.0}/{:.0} MiB), Estimated time: {}, Speed: {:.2} MiB/s",
        progress.percent(),
        progress.written_mib(),
        progress.expected_mib(),
        eta,
        progress.rate_mib()
    )
}

/// Closing progress line once the transcoder has finished.
pub fn completion_line(stats: &RunStats) -> String {
    format!(
        "Progress: 100% ({:.0} MiB), Speed: {:.2} MiB/s",
        stats.written as f64 / (1024.0 * 1024.0),
        stats.rate_mib()
    )
}

/// Human-readable listing of a probed file's tracks.
pub fn track_listing(layout: &StreamLayout) -> String {
    let mut out = format!("File: {}\n", layout.file_path.display());
    out.push_str(&format!("Container: {}\n", layout.container));
    out.push_str(&format!("Video streams: {}\n", layout.video_streams));

    for (label, tracks) in [
        ("Audio", &layout.audio_tracks),
        ("Subtitle", &layout.subtitle_tracks),
    ] {
        out.push_str(&format!("{} tracks: {}\n", label, tracks.len()));
        for track in tracks {
            out.push_str(&format!(
                "  #{} {} ({})\n",
                track.track_no, track.language, track.raw_language
            ));
        }
    }

    out
}
