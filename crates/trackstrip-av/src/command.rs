//! ffmpeg stream-copy command construction.

use crate::probe::StreamLayout;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use trackstrip_core::{StreamKind, Track};

/// A stream-copy ffmpeg invocation that keeps only selected tracks.
///
/// Video is always copied. Audio and subtitle tracks are mapped by their
/// zero-based index within their kind, so dropping a track never shifts the
/// selection of the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemuxCommand {
    program: PathBuf,
    args: Vec<OsString>,
    output: PathBuf,
}

impl RemuxCommand {
    /// Build the command for `layout`, keeping `audio` and `subtitles`.
    ///
    /// With `clean_metadata`, the container and first video stream lose their
    /// `title` and `comment` tags.
    pub fn build(
        ffmpeg: &Path,
        layout: &StreamLayout,
        audio: &[Track],
        subtitles: &[Track],
        output: &Path,
        clean_metadata: bool,
    ) -> Self {
        let mut args: Vec<OsString> = vec![
            "-y".into(),
            "-i".into(),
            layout.file_path.clone().into(),
            "-c".into(),
            "copy".into(),
        ];

        if clean_metadata {
            args.extend(["-metadata", "title=", "-metadata", "comment="].map(OsString::from));
            if layout.has_video() {
                args.extend(
                    ["-metadata:s:v:0", "title=", "-metadata:s:v:0", "comment="]
                        .map(OsString::from),
                );
            }
        }

        if layout.has_video() {
            args.extend(["-map", "0:v"].map(OsString::from));
        }
        let mapped = audio
            .iter()
            .map(|t| map_spec(StreamKind::Audio, t))
            .chain(subtitles.iter().map(|t| map_spec(StreamKind::Subtitle, t)));
        for spec in mapped {
            args.push("-map".into());
            args.push(spec.into());
        }

        args.push(output.into());

        Self {
            program: ffmpeg.to_path_buf(),
            args,
            output: output.to_path_buf(),
        }
    }

    /// Arguments passed to ffmpeg.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// File the command writes.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// A [`Command`] ready to spawn.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// `-map` value for one track: `0:a:<index>` or `0:s:<index>`.
fn map_spec(kind: StreamKind, track: &Track) -> String {
    format!("0:{}:{}", kind.specifier(), track.index)
}

impl fmt::Display for RemuxCommand {
    /// Space-joined command line, as shown for dry runs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
