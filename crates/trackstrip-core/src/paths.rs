//! Path utilities for detecting media files by extension.
//!
//! Discovery only looks at file names; whether a file really carries audio or
//! subtitle streams is decided later by probing it.

use std::path::Path;

/// Container extensions that are considered media files by default.
const MEDIA_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "mov", "flv", "wmv", "mpeg", "mpg", "m4v", "webm", "ts", "ogm", "ogv",
];

/// Check if a path has one of the default media extensions.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use trackstrip_core::paths::is_media_file;
///
/// assert!(is_media_file(Path::new("movie.mkv")));
/// assert!(is_media_file(Path::new("/path/to/video.MP4")));
/// assert!(!is_media_file(Path::new("subtitle.srt")));
/// ```
pub fn is_media_file(path: &Path) -> bool {
    has_extension(path, MEDIA_EXTENSIONS)
}

/// Check if a path's extension is one of `extensions` (case-insensitive).
///
/// Entries may be given with or without a leading dot.
pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    extensions
        .iter()
        .any(|candidate| candidate.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
}
