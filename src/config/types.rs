use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use trackstrip_core::FilterOptions;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub progress: ProgressConfig,

    /// Default filters, used when no filter option is given on the command line
    #[serde(default)]
    pub filters: FilterOptions,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Path to ffmpeg (looked up in PATH when unset)
    #[serde(default)]
    pub ffmpeg: Option<PathBuf>,

    /// Path to ffprobe (looked up in PATH when unset)
    #[serde(default)]
    pub ffprobe: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Inserted before the extension: movie.<suffix>.mkv
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Strip title/comment metadata from the container and first video stream
    #[serde(default = "default_clean_metadata")]
    pub clean_metadata: bool,

    /// Directory for cleaned files (next to the input when unset)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_suffix() -> String {
    trackstrip_av::workspace::DEFAULT_SUFFIX.to_string()
}

fn default_clean_metadata() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            clean_metadata: default_clean_metadata(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Media extensions to pick up (built-in list when empty)
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default = "default_follow_links")]
    pub follow_links: bool,
}

fn default_follow_links() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            follow_links: default_follow_links(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProgressConfig {
    /// How often to check the output size while ffmpeg runs
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    30
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ProgressConfig {
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms)
    }
}
