//! Output placement for a cleaned file.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// Default infix inserted before the extension of output files.
pub const DEFAULT_SUFFIX: &str = "cleaned";

/// Input/output paths for one file.
///
/// The output is written next to the input (or into an output directory) as
/// `<stem>.<suffix>.<ext>`. With overwrite, [`Workspace::finalize`] moves it
/// over the input.
///
/// # Example
///
/// ```no_run
/// use trackstrip_av::Workspace;
/// use std::path::Path;
///
/// let workspace = Workspace::new("/media/movie.mkv", None, "cleaned")?;
/// assert_eq!(workspace.output(), Path::new("/media/movie.cleaned.mkv"));
/// // ... run ffmpeg into workspace.output() ...
/// let final_path = workspace.finalize(false)?;
/// # Ok::<(), trackstrip_av::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Workspace {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl Workspace {
    /// Plan the output path for `input`.
    ///
    /// Does not touch the filesystem; see [`Workspace::prepare`].
    pub fn new<P: AsRef<Path>>(input: P, output_dir: Option<&Path>, suffix: &str) -> Result<Self> {
        let input = input.as_ref();

        let stem = input
            .file_stem()
            .ok_or_else(|| Error::InvalidInput(format!("Invalid input file path: {:?}", input)))?;

        let mut file_name = stem.to_os_string();
        file_name.push(".");
        file_name.push(suffix);
        if let Some(ext) = input.extension() {
            file_name.push(".");
            file_name.push(ext);
        }

        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        Ok(Self {
            input_path: input.to_path_buf(),
            output_path: dir.join(file_name),
        })
    }

    /// Get the input file path.
    pub fn input(&self) -> &Path {
        &self.input_path
    }

    /// Get the output file path.
    pub fn output(&self) -> &Path {
        &self.output_path
    }

    /// Create the output directory if it does not exist yet.
    pub fn prepare(&self) -> Result<()> {
        if let Some(dir) = self.output_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    Error::Workspace(format!("Error creating output directory {:?}: {}", dir, e))
                })?;
            }
        }
        Ok(())
    }

    /// Settle the output and return where it ended up.
    ///
    /// Without `overwrite` the output stays where it was written. With
    /// `overwrite` it replaces the input; the original is moved to a fresh
    /// backup file until the move succeeds and restored if it fails. No other
    /// file next to the input is touched.
    pub fn finalize(self, overwrite: bool) -> Result<PathBuf> {
        if !self.output_path.exists() {
            return Err(Error::Workspace(format!(
                "Output file does not exist: {:?}",
                self.output_path
            )));
        }

        if !overwrite {
            return Ok(self.output_path);
        }

        let dest = &self.input_path;

        if dest.exists() {
            let backup = self.reserve_backup()?;
            std::fs::rename(dest, &backup).map_err(|e| {
                Error::Workspace(format!("Failed to create backup of original file: {}", e))
            })?;

            if let Err(e) = std::fs::rename(&self.output_path, dest) {
                if let Err(restore) = std::fs::rename(&backup, dest) {
                    let kept = backup.to_path_buf();
                    let _ = backup.keep();
                    return Err(Error::Workspace(format!(
                        "Failed to move output over input: {}; original left at {:?} ({})",
                        e, kept, restore
                    )));
                }
                return Err(Error::Workspace(format!(
                    "Failed to move output over input: {}",
                    e
                )));
            }

            if let Err(e) = backup.close() {
                tracing::warn!("Failed to remove backup of {:?}: {}", dest, e);
            }
        } else {
            std::fs::rename(&self.output_path, dest).map_err(|e| {
                Error::Workspace(format!("Failed to move output to destination: {}", e))
            })?;
        }

        Ok(dest.to_path_buf())
    }

    /// Reserve a uniquely named backup path beside the input.
    ///
    /// The returned path is deleted on drop unless kept.
    fn reserve_backup(&self) -> Result<TempPath> {
        let dir = self
            .input_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let backup = tempfile::Builder::new()
            .prefix(".trackstrip-")
            .suffix(".bak")
            .tempfile_in(dir)
            .map_err(|e| Error::Workspace(format!("Failed to reserve backup file: {}", e)))?;

        Ok(backup.into_temp_path())
    }
}
