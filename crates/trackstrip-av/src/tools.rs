//! External tool detection.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Tools trackstrip shells out to.
pub const FFMPEG: &str = "ffmpeg";
pub const FFPROBE: &str = "ffprobe";

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Check if a tool is available and get its information.
///
/// The ffmpeg family prints its version with `-version`, so that is the
/// argument used.
///
/// # Example
///
/// ```no_run
/// use trackstrip_av::check_tool;
///
/// let info = check_tool("ffprobe");
/// if info.available {
///     println!("ffprobe version: {:?}", info.version);
/// }
/// ```
pub fn check_tool(name: &str) -> ToolInfo {
    check_tool_at(name, Path::new(name))
}

/// Check a tool at an explicit path (or bare name resolved through `PATH`).
pub fn check_tool_at(name: &str, program: &Path) -> ToolInfo {
    let result = Command::new(program).arg("-version").output();

    match result {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string());

            let path = which::which(program).ok();

            ToolInfo {
                name: name.to_string(),
                available: true,
                version,
                path,
            }
        }
        _ => ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: None,
        },
    }
}

/// Check ffmpeg and ffprobe, honoring configured paths.
pub fn check_tools(ffmpeg: Option<&Path>, ffprobe: Option<&Path>) -> Vec<ToolInfo> {
    vec![
        check_tool_at(FFMPEG, ffmpeg.unwrap_or(Path::new(FFMPEG))),
        check_tool_at(FFPROBE, ffprobe.unwrap_or(Path::new(FFPROBE))),
    ]
}

/// Require that a tool is available, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] if the configured path does not exist and
/// the tool is not on `PATH` either.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        tracing::warn!(
            "Configured {} path {:?} does not exist, falling back to PATH",
            name,
            path
        );
    }

    require_tool(name)
}

/// Resolved locations of the tools needed for a run.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
}

impl Toolchain {
    /// Locate ffmpeg and ffprobe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] for the first tool that is missing.
    pub fn locate(ffmpeg: Option<&Path>, ffprobe: Option<&Path>) -> Result<Self> {
        Ok(Self {
            ffmpeg: get_tool_path(FFMPEG, ffmpeg)?,
            ffprobe: get_tool_path(FFPROBE, ffprobe)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_tool_not_found() {
        let info = check_tool("nonexistent_tool_12345");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert!(info.path.is_none());
    }

    #[test]
    fn test_require_tool_not_found() {
        let err = require_tool("nonexistent_tool_12345").unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }

    #[test]
    fn test_get_tool_path_prefers_existing_config_path() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = get_tool_path("nonexistent_tool_12345", Some(file.path())).unwrap();
        assert_eq!(path, file.path());
    }

    #[test]
    fn test_get_tool_path_missing_config_path_falls_back() {
        let result = get_tool_path(
            "nonexistent_tool_12345",
            Some(Path::new("/nonexistent/dir/tool")),
        );
        assert!(result.is_err());
    }
}
