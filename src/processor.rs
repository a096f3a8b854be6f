//! Per-file processing: probe, classify, remux, report.

use crate::config::Config;
use crate::report::{self, FilePlan};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use trackstrip_av::probe::{probe_with_ffprobe, StreamLayout};
use trackstrip_av::{run_with_progress, RemuxCommand, Toolchain, Workspace};
use trackstrip_core::{ResolvedFilters, StreamKind};

/// Settings that apply to every file of a run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Where cleaned files go (next to the input when `None`).
    pub output_dir: Option<PathBuf>,
    pub suffix: String,
    pub clean_metadata: bool,
    /// Replace the input with the cleaned file.
    pub overwrite: bool,
    /// Print the ffmpeg command instead of running it.
    pub dry_run: bool,
    pub poll_interval: Duration,
}

impl ProcessOptions {
    /// Options taken from configuration alone.
    pub fn from_config(config: &Config) -> Self {
        Self {
            output_dir: config.output.directory.clone(),
            suffix: config.output.suffix.clone(),
            clean_metadata: config.output.clean_metadata,
            overwrite: false,
            dry_run: false,
            poll_interval: config.progress.poll_interval(),
        }
    }
}

/// Resolve an output directory argument; `.` means the working directory.
pub fn resolve_output_dir(dir: &Path) -> PathBuf {
    if dir == Path::new(".") {
        std::env::current_dir().unwrap_or_else(|_| dir.to_path_buf())
    } else {
        dir.to_path_buf()
    }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Dry run: the command that would have run.
    Planned(String),
    /// The cleaned file's final location.
    Written(PathBuf),
}

/// Totals for a run over many files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Processes media files one at a time with a fixed filter set.
pub struct Processor<'a> {
    tools: &'a Toolchain,
    filters: &'a ResolvedFilters,
    options: ProcessOptions,
}

impl<'a> Processor<'a> {
    pub fn new(tools: &'a Toolchain, filters: &'a ResolvedFilters, options: ProcessOptions) -> Self {
        Self {
            tools,
            filters,
            options,
        }
    }

    /// Decide which tracks of `layout` stay.
    pub fn plan(&self, layout: &StreamLayout) -> FilePlan {
        let classify = |kind| self.filters.for_kind(kind).classify(layout.tracks(kind));
        FilePlan {
            audio: classify(StreamKind::Audio),
            subtitles: classify(StreamKind::Subtitle),
        }
    }

    /// Build the output placement and ffmpeg command for a planned file.
    pub fn command_for(
        &self,
        layout: &StreamLayout,
        plan: &FilePlan,
    ) -> Result<(Workspace, RemuxCommand)> {
        let workspace = Workspace::new(
            &layout.file_path,
            self.options.output_dir.as_deref(),
            &self.options.suffix,
        )?;

        let command = RemuxCommand::build(
            &self.tools.ffmpeg,
            layout,
            &plan.audio.kept,
            &plan.subtitles.kept,
            workspace.output(),
            self.options.clean_metadata,
        );

        Ok((workspace, command))
    }

    /// Process every file, continuing past failures.
    pub fn process_all(&self, files: &[PathBuf]) -> RunSummary {
        let mut summary = RunSummary::default();

        for file in files {
            match self.process_file(file) {
                Ok(_) => summary.succeeded += 1,
                Err(e) => {
                    tracing::error!("Failed to process {:?}: {:#}", file, e);
                    summary.failed += 1;
                }
            }
        }

        tracing::debug!(
            "Run finished: {} succeeded, {} failed",
            summary.succeeded,
            summary.failed
        );
        summary
    }

    /// Process a single file.
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        eprintln!("Processing file: {}", path.display());

        let layout = probe_with_ffprobe(&self.tools.ffprobe, path)
            .with_context(|| format!("Error probing file {:?}", path))?;
        tracing::debug!(
            "{:?}: {} audio, {} subtitle tracks",
            path,
            layout.audio_tracks.len(),
            layout.subtitle_tracks.len()
        );

        let plan = self.plan(&layout);
        if plan.is_untouched() {
            tracing::info!("No tracks to remove from {:?}", path);
        }

        let (workspace, command) = self.command_for(&layout, &plan)?;

        if self.options.dry_run {
            if let Err(e) = workspace.prepare() {
                tracing::warn!("{}", e);
            }
            let rendered = command.to_string();
            println!("FFMPEG command: {}", rendered);
            return Ok(FileOutcome::Planned(rendered));
        }

        workspace.prepare()?;

        if let Some(line) = report::removal_summary(&plan) {
            eprintln!("{}", line);
        }

        let stats = run_with_progress(
            &command,
            layout.file_size,
            self.options.poll_interval,
            |progress| {
                eprint!("{}\x1b[K\r", report::progress_line(&progress));
                let _ = std::io::stderr().flush();
            },
        )
        .map_err(|e| {
            eprintln!();
            e
        })?;
        eprint!("{}\x1b[K\r\n", report::completion_line(&stats));

        let final_path = workspace
            .finalize(self.options.overwrite)
            .with_context(|| format!("Error placing output for {:?}", path))?;

        eprintln!("{}", report::remaining_summary(&plan));
        eprint!("File written to: ");
        let _ = std::io::stderr().flush();
        println!("{}", final_path.display());

        tracing::info!(
            "Wrote {:?} in {:.1}s ({:.2} MiB/s)",
            final_path,
            stats.elapsed.as_secs_f64(),
            stats.rate_mib()
        );

        Ok(FileOutcome::Written(final_path))
    }
}

/// Print the probed tracks of each file without processing anything.
pub fn list_tracks(ffprobe: &Path, files: &[PathBuf], json: bool) -> RunSummary {
    let mut summary = RunSummary::default();

    for file in files {
        match probe_with_ffprobe(ffprobe, file) {
            Ok(layout) => {
                if json {
                    match serde_json::to_string_pretty(&layout) {
                        Ok(out) => println!("{}", out),
                        Err(e) => {
                            tracing::error!("Failed to serialize {:?}: {}", file, e);
                            summary.failed += 1;
                            continue;
                        }
                    }
                } else {
                    print!("{}", report::track_listing(&layout));
                }
                summary.succeeded += 1;
            }
            Err(e) => {
                tracing::error!("Error probing file {:?}: {}", file, e);
                summary.failed += 1;
            }
        }
    }

    summary
}
