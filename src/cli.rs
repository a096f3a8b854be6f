use clap::Parser;
use std::path::PathBuf;
use trackstrip_core::FilterOptions;

/// Filter lists are comma-separated track numbers (1-based) and languages,
/// e.g. `1,eng,Japanese`.
#[derive(Parser, Debug)]
#[command(name = "trackstrip")]
#[command(
    author,
    version,
    about = "Remove unwanted audio and subtitle tracks from media files"
)]
pub struct Cli {
    /// Media files or directories to process
    pub paths: Vec<PathBuf>,

    /// Keep only these audio and subtitle tracks
    #[arg(short, long, value_name = "LIST")]
    pub keep: Option<String>,

    /// Remove these audio and subtitle tracks
    #[arg(short, long, value_name = "LIST")]
    pub remove: Option<String>,

    /// Keep only these audio tracks
    #[arg(long, visible_alias = "ka", value_name = "LIST")]
    pub keep_audio: Option<String>,

    /// Remove these audio tracks
    #[arg(long, visible_alias = "ra", value_name = "LIST")]
    pub remove_audio: Option<String>,

    /// Keep only these subtitle tracks
    #[arg(long, visible_alias = "ks", value_name = "LIST")]
    pub keep_subtitles: Option<String>,

    /// Remove these subtitle tracks
    #[arg(long, visible_alias = "rs", value_name = "LIST")]
    pub remove_subtitles: Option<String>,

    #[arg(long, hide = true, value_name = "LIST")]
    pub keep_subtitle: Option<String>,

    #[arg(long, hide = true, value_name = "LIST")]
    pub remove_subtitle: Option<String>,

    /// Directory for cleaned files (default: next to the input)
    #[arg(short, long, short_alias = 'O', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the ffmpeg command for each file without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Replace the input file with the cleaned file
    #[arg(long)]
    pub overwrite: bool,

    /// Keep title and comment metadata
    #[arg(long)]
    pub no_clean_metadata: bool,

    /// List the tracks of each file instead of processing it
    #[arg(long)]
    pub list: bool,

    /// With --list, print JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Check that ffmpeg and ffprobe are available
    #[arg(long)]
    pub check_tools: bool,

    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The filter options given on the command line.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            keep: self.keep.clone(),
            remove: self.remove.clone(),
            keep_audio: self.keep_audio.clone(),
            remove_audio: self.remove_audio.clone(),
            keep_subtitles: self.keep_subtitles.clone(),
            remove_subtitles: self.remove_subtitles.clone(),
            keep_subtitle: self.keep_subtitle.clone(),
            remove_subtitle: self.remove_subtitle.clone(),
        }
    }

    /// Whether any filter option was given.
    pub fn has_filters(&self) -> bool {
        [
            &self.keep,
            &self.remove,
            &self.keep_audio,
            &self.remove_audio,
            &self.keep_subtitles,
            &self.remove_subtitles,
            &self.keep_subtitle,
            &self.remove_subtitle,
        ]
        .iter()
        .any(|option| option.is_some())
    }
}
