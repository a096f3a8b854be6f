//! Running a remux with size-based progress reporting.

use crate::command::RemuxCommand;
use crate::tools::FFMPEG;
use crate::{Error, Result};
use std::io::Read;
use std::path::Path;
use std::process::Stdio;
use std::thread;
use std::time::{Duration, Instant};

const MIB: f64 = 1024.0 * 1024.0;

/// Default interval between output size checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Snapshot of a running stream copy.
///
/// A stream copy writes roughly as many bytes as it reads, so the input size
/// serves as the expected output size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopyProgress {
    /// Bytes written to the output so far.
    pub written: u64,
    /// Size of the input file.
    pub expected: u64,
    /// Time since the process started.
    pub elapsed: Duration,
}

impl CopyProgress {
    /// Percentage of the expected size written (may exceed 100).
    pub fn percent(&self) -> f64 {
        if self.expected == 0 {
            return 0.0;
        }
        self.written as f64 / self.expected as f64 * 100.0
    }

    /// Write rate in MiB per second.
    pub fn rate_mib(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.written as f64 / secs / MIB
    }

    /// Estimated time left at the current rate, if a rate is known.
    pub fn eta(&self) -> Option<Duration> {
        let secs = self.elapsed.as_secs_f64();
        if self.written == 0 || secs <= 0.0 {
            return None;
        }
        let rate = self.written as f64 / secs;
        let remaining = self.expected.saturating_sub(self.written) as f64;
        Some(Duration::from_secs_f64(remaining / rate))
    }

    pub fn written_mib(&self) -> f64 {
        self.written as f64 / MIB
    }

    pub fn expected_mib(&self) -> f64 {
        self.expected as f64 / MIB
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    pub elapsed: Duration,
    /// Final output size in bytes.
    pub written: u64,
}

impl RunStats {
    /// Average write rate in MiB per second.
    pub fn rate_mib(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.written as f64 / secs / MIB
    }
}

/// Run `command`, calling `on_progress` every `poll_interval` once the output
/// file has data.
///
/// On failure the partial output is deleted and the error carries the command
/// line and ffmpeg's stderr.
///
/// # Errors
///
/// - [`Error::ToolNotFound`] if ffmpeg cannot be spawned
/// - [`Error::ToolFailed`] if ffmpeg exits unsuccessfully
pub fn run_with_progress(
    command: &RemuxCommand,
    expected_size: u64,
    poll_interval: Duration,
    mut on_progress: impl FnMut(CopyProgress),
) -> Result<RunStats> {
    let output = command.output();

    tracing::debug!("Running: {}", command);

    let start = Instant::now();
    let mut child = command
        .to_command()
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::from_spawn(FFMPEG, e))?;

    // Drain stderr off-thread so ffmpeg never blocks on a full pipe.
    let stderr_reader = child.stderr.take().map(|mut stderr| {
        thread::spawn(move || {
            let mut buf = String::new();
            let _ = stderr.read_to_string(&mut buf);
            buf
        })
    });

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Lost track of ffmpeg, stopping it: {}", e);
                let _ = child.kill();
                let _ = child.wait();
                if let Some(handle) = stderr_reader {
                    let _ = handle.join();
                }
                remove_partial(output);
                return Err(e.into());
            }
        }

        let written = file_size(output);
        if written > 0 {
            on_progress(CopyProgress {
                written,
                expected: expected_size,
                elapsed: start.elapsed(),
            });
        }

        thread::sleep(poll_interval);
    };

    let elapsed = start.elapsed();
    let stderr = stderr_reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default();

    if !status.success() {
        remove_partial(output);

        let code = status
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        let mut message = format!("exit code {}: {}", code, command);
        if !stderr.trim().is_empty() {
            message.push('\n');
            message.push_str(stderr.trim());
        }
        return Err(Error::tool_failed(FFMPEG, message));
    }

    Ok(RunStats {
        elapsed,
        written: file_size(output),
    })
}

fn remove_partial(output: &Path) {
    if output.exists() {
        if let Err(e) = std::fs::remove_file(output) {
            tracing::warn!("Failed to remove partial output {:?}: {}", output, e);
        }
    }
}

fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
