//! Media file discovery.
//!
//! Turns the paths given on the command line into the list of media files to
//! process: files are taken as-is when their extension matches, directories
//! are walked recursively.

use crate::config::ScanConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use trackstrip_core::paths::{has_extension, is_media_file};
use walkdir::WalkDir;

/// Finds media files under a set of input paths.
pub struct Scanner {
    extensions: Vec<String>,
    follow_links: bool,
}

impl Scanner {
    /// Create a scanner from scan settings.
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
            follow_links: config.follow_links,
        }
    }

    fn matches(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            is_media_file(path)
        } else {
            has_extension(path, &self.extensions)
        }
    }

    /// Collect media files from `paths`, as absolute paths in discovery order.
    ///
    /// Paths that do not exist are logged and skipped.
    pub fn discover<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in paths {
            let path = path.as_ref();

            if path.is_file() {
                if self.matches(path) {
                    files.push(absolute(path));
                } else {
                    debug!("Skipping non-media file: {:?}", path);
                }
            } else if path.is_dir() {
                files.extend(self.scan_directory(path));
            } else {
                warn!("Path does not exist: {:?}", path);
            }
        }

        files
    }

    /// Walk a directory recursively for media files.
    pub fn scan_directory(&self, dir: &Path) -> Vec<PathBuf> {
        debug!("Scanning directory: {:?}", dir);

        let files: Vec<PathBuf> = WalkDir::new(dir)
            .follow_links(self.follow_links)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Error walking {:?}: {}", dir, e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && self.matches(entry.path()))
            .map(|entry| absolute(entry.path()))
            .collect();

        debug!("Found {} media files in {:?}", files.len(), dir);
        files
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
