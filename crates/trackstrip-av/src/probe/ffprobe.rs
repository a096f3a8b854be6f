//! FFprobe-based stream probing.

use super::types::StreamLayout;
use crate::tools::FFPROBE;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;
use trackstrip_core::Track;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    format: Option<FfprobeFormat>,
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    #[serde(default)]
    format_name: String,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    #[serde(default)]
    codec_type: Option<String>,
    #[serde(default)]
    tags: FfprobeTags,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeTags {
    language: Option<String>,
}

/// Probe a media file using ffprobe.
///
/// `ffprobe` is the executable to run, usually from [`crate::Toolchain`].
pub fn probe_with_ffprobe(ffprobe: &Path, path: &Path) -> Result<StreamLayout> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    tracing::debug!("Probing {:?} with {:?}", path, ffprobe);

    let output = Command::new(ffprobe)
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|e| Error::from_spawn(FFPROBE, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed(FFPROBE, stderr.trim().to_string()));
    }

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error(FFPROBE, format!("Invalid UTF-8: {}", e)))?;

    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    parse_ffprobe_json(path, file_size, &json_str)
}

/// Build a [`StreamLayout`] from ffprobe's JSON output.
///
/// Audio and subtitle streams are numbered per kind in the order ffprobe lists
/// them; a missing `language` tag becomes `und`.
pub fn parse_ffprobe_json(path: &Path, file_size: u64, json: &str) -> Result<StreamLayout> {
    let output: FfprobeOutput = serde_json::from_str(json)?;

    let mut layout = StreamLayout {
        file_path: path.to_path_buf(),
        file_size,
        container: output.format.map(|f| f.format_name).unwrap_or_default(),
        video_streams: 0,
        audio_tracks: Vec::new(),
        subtitle_tracks: Vec::new(),
    };

    let mut audio_index = 0u32;
    let mut subtitle_index = 0u32;

    for stream in output.streams {
        let language = stream.tags.language.as_deref();
        match stream.codec_type.as_deref() {
            Some("video") => layout.video_streams += 1,
            Some("audio") => {
                layout.audio_tracks.push(Track::new(audio_index, language));
                audio_index += 1;
            }
            Some("subtitle") => {
                layout.subtitle_tracks.push(Track::new(subtitle_index, language));
                subtitle_index += 1;
            }
            _ => {}
        }
    }

    tracing::trace!(
        video = layout.video_streams,
        audio = layout.audio_tracks.len(),
        subtitles = layout.subtitle_tracks.len(),
        "Parsed ffprobe output for {:?}",
        path
    );

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "streams": [
            {"index": 0, "codec_type": "video", "codec_name": "hevc"},
            {"index": 1, "codec_type": "audio", "codec_name": "truehd", "tags": {"language": "eng"}},
            {"index": 2, "codec_type": "subtitle", "codec_name": "subrip", "tags": {"language": "rus", "title": "Full"}},
            {"index": 3, "codec_type": "audio", "codec_name": "ac3"},
            {"index": 4, "codec_type": "attachment", "tags": {"filename": "font.ttf"}},
            {"index": 5, "codec_type": "subtitle", "codec_name": "hdmv_pgs_subtitle", "tags": {"language": "ger"}}
        ],
        "format": {"filename": "movie.mkv", "format_name": "matroska,webm", "size": "1234"}
    }"#;

    #[test]
    fn test_parse_stream_layout() {
        let layout = parse_ffprobe_json(Path::new("/m/movie.mkv"), 1234, SAMPLE).unwrap();

        assert_eq!(layout.container, "matroska,webm");
        assert_eq!(layout.file_size, 1234);
        assert_eq!(layout.video_streams, 1);
        assert!(layout.has_video());

        assert_eq!(layout.audio_tracks.len(), 2);
        assert_eq!(layout.audio_tracks[0].language, "English");
        assert_eq!(layout.audio_tracks[1].index, 1);
        assert_eq!(layout.audio_tracks[1].track_no, 2);
        assert_eq!(layout.audio_tracks[1].raw_language, "und");
        assert_eq!(layout.audio_tracks[1].language, "Undetermined");

        assert_eq!(layout.subtitle_tracks.len(), 2);
        assert_eq!(layout.subtitle_tracks[0].index, 0);
        assert_eq!(layout.subtitle_tracks[0].language, "Russian");
        assert_eq!(layout.subtitle_tracks[1].index, 1);
        assert_eq!(layout.subtitle_tracks[1].raw_language, "ger");
    }

    #[test]
    fn test_parse_without_streams_or_format() {
        let layout = parse_ffprobe_json(Path::new("x.mkv"), 0, "{}").unwrap();
        assert_eq!(layout.container, "");
        assert!(!layout.has_video());
        assert!(layout.audio_tracks.is_empty());
        assert!(layout.subtitle_tracks.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_ffprobe_json(Path::new("x.mkv"), 0, "not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_probe_missing_file() {
        let err = probe_with_ffprobe(Path::new(FFPROBE), Path::new("/nonexistent/movie.mkv"))
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
