mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    tracing::debug!("Loaded config from {:?}", path);

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./trackstrip.toml",
        "~/.config/trackstrip/config.toml",
        "/etc/trackstrip/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.output.suffix.trim().is_empty() {
        anyhow::bail!("output.suffix cannot be empty");
    }

    if config.output.suffix.contains(std::path::is_separator) {
        anyhow::bail!("output.suffix cannot contain a path separator");
    }

    if config.progress.poll_interval_ms == 0 {
        anyhow::bail!("progress.poll_interval_ms must be positive");
    }

    for (tool, path) in [
        ("ffmpeg", &config.tools.ffmpeg),
        ("ffprobe", &config.tools.ffprobe),
    ] {
        if let Some(path) = path {
            if !path.exists() {
                tracing::warn!("Configured {} path does not exist: {:?}", tool, path);
            }
        }
    }

    config
        .filters
        .validate()
        .context("Invalid [filters] section")?;

    Ok(())
}
