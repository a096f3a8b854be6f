//! # trackstrip-av
//!
//! The ffmpeg side of trackstrip.
//!
//! This crate provides:
//!
//! - **Tool discovery** ([`Toolchain`], [`check_tools`]) for ffmpeg and ffprobe
//! - **Probing** ([`probe::probe_with_ffprobe`]) into a [`StreamLayout`] of
//!   audio and subtitle [`trackstrip_core::Track`]s
//! - **Command building** ([`RemuxCommand`]) mapping only kept tracks
//! - **Running** ([`runner::run_with_progress`]) with output-size progress
//! - **Output placement** ([`Workspace`]) including in-place overwrite
//!
//! ## Example
//!
//! ```no_run
//! use trackstrip_av::{probe::probe_with_ffprobe, RemuxCommand, Toolchain, Workspace};
//! use trackstrip_core::FilterOptions;
//! use std::path::Path;
//!
//! let tools = Toolchain::locate(None, None)?;
//! let filters = FilterOptions {
//!     keep_audio: Some("eng".into()),
//!     ..Default::default()
//! }
//! .resolve()
//! .expect("no conflicting options");
//!
//! let layout = probe_with_ffprobe(&tools.ffprobe, Path::new("/media/movie.mkv"))?;
//! let audio = filters.audio.classify(&layout.audio_tracks);
//! let subtitles = filters.subtitles.classify(&layout.subtitle_tracks);
//!
//! let workspace = Workspace::new(&layout.file_path, None, "cleaned")?;
//! let command = RemuxCommand::build(
//!     &tools.ffmpeg,
//!     &layout,
//!     &audio.kept,
//!     &subtitles.kept,
//!     workspace.output(),
//!     true,
//! );
//! println!("{}", command);
//! # Ok::<(), trackstrip_av::Error>(())
//! ```

pub mod command;
mod error;
pub mod probe;
pub mod runner;
pub mod tools;
pub mod workspace;

// Re-exports
pub use command::RemuxCommand;
pub use error::{Error, Result};
pub use probe::StreamLayout;
pub use runner::{run_with_progress, CopyProgress, RunStats};
pub use tools::{check_tool, check_tools, require_tool, ToolInfo, Toolchain};
pub use workspace::Workspace;
