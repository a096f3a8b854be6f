//! CLI end-to-end tests
//!
//! Tests for the trackstrip command-line interface. Tests that need real
//! media generate it with ffmpeg and are skipped when ffmpeg is missing.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

/// Get a command for the trackstrip binary, run from `dir` so no stray
/// `./trackstrip.toml` is picked up.
#[allow(deprecated)]
fn trackstrip_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trackstrip").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn has_ffmpeg() -> bool {
    ["ffmpeg", "ffprobe"].iter().all(|tool| {
        Command::new(tool)
            .arg("-version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    })
}

/// One second of video with English and Russian audio and an English
/// subtitle track.
fn generate_sample(dir: &Path) -> PathBuf {
    let srt = dir.join("sample.srt");
    fs::write(&srt, "1\n00:00:00,000 --> 00:00:00,900\nHello\n").unwrap();

    let output = dir.join("sample.mkv");
    let status = Command::new("ffmpeg")
        .args(["-v", "error", "-y"])
        .args(["-f", "lavfi", "-i", "testsrc=duration=1:size=64x64:rate=5"])
        .args(["-f", "lavfi", "-i", "sine=duration=1"])
        .args(["-f", "lavfi", "-i", "sine=duration=1:frequency=880"])
        .arg("-i")
        .arg(&srt)
        .args(["-map", "0", "-map", "1", "-map", "2", "-map", "3"])
        .args(["-c:v", "mpeg4", "-c:a", "aac", "-c:s", "srt"])
        .args(["-metadata:s:a:0", "language=eng"])
        .args(["-metadata:s:a:1", "language=rus"])
        .args(["-metadata:s:s:0", "language=eng"])
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success(), "failed to generate sample media");
    output
}

fn sample_or_skip() -> Option<(TempDir, PathBuf)> {
    if !has_ffmpeg() {
        eprintln!("Skipping: ffmpeg/ffprobe not available");
        return None;
    }
    let temp = tempdir().unwrap();
    let sample = generate_sample(temp.path());
    Some((temp, sample))
}

#[test]
fn test_cli_no_args_shows_help() {
    let temp = tempdir().unwrap();
    trackstrip_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let temp = tempdir().unwrap();
    trackstrip_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trackstrip"))
        .stdout(predicate::str::contains("--keep-audio"))
        .stdout(predicate::str::contains("--keep-subtitle ").not());
}

#[test]
fn test_cli_version_flag() {
    let temp = tempdir().unwrap();
    trackstrip_cmd(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trackstrip"));
}

#[test]
fn test_cli_check_tools() {
    let temp = tempdir().unwrap();
    trackstrip_cmd(temp.path())
        .arg("--check-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("ffmpeg"))
        .stdout(predicate::str::contains("ffprobe"));
}

#[test]
fn test_cli_keep_conflict_fails() {
    let temp = tempdir().unwrap();
    trackstrip_cmd(temp.path())
        .args(["-k", "en", "--ka", "fr", "movie.mkv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "-k/--keep cannot be combined with --keep-audio or --keep-subtitles",
        ));
}

#[test]
fn test_cli_remove_conflict_fails() {
    let temp = tempdir().unwrap();
    trackstrip_cmd(temp.path())
        .args(["--remove", "2", "--remove-subtitle", "eng", "movie.mkv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("-r/--remove cannot be combined"));
}

#[test]
fn test_cli_invalid_config_fails() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("bad.toml");
    fs::write(&config, "[progress]\npoll_interval_ms = 0\n").unwrap();

    trackstrip_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("movie.mkv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("poll_interval_ms"));
}

#[test]
fn test_cli_no_media_files() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("notes.txt"), "not a movie").unwrap();

    // Without ffmpeg the tool check fails first; either way nothing runs.
    trackstrip_cmd(temp.path())
        .args(["-k", "eng"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("No media files found")
                .or(predicate::str::contains("tool not found")),
        );
}

#[test]
fn test_cli_dry_run_prints_command() {
    let Some((temp, sample)) = sample_or_skip() else {
        return;
    };

    trackstrip_cmd(temp.path())
        .args(["--dry-run", "--ra", "rus"])
        .arg(&sample)
        .assert()
        .success()
        .stdout(predicate::str::contains("FFMPEG command:"))
        .stdout(predicate::str::contains("-map 0:v -map 0:a:0 -map 0:s:0"))
        .stdout(predicate::str::contains("-map 0:a:1").not())
        .stdout(predicate::str::contains("sample.cleaned.mkv"));

    assert!(!temp.path().join("sample.cleaned.mkv").exists());
}

#[test]
fn test_cli_list_json() {
    let Some((temp, sample)) = sample_or_skip() else {
        return;
    };

    let output = trackstrip_cmd(temp.path())
        .args(["--list", "--json"])
        .arg(&sample)
        .output()
        .unwrap();
    assert!(output.status.success());

    let layout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(layout["audio_tracks"][0]["language"], "English");
    assert_eq!(layout["audio_tracks"][1]["language"], "Russian");
    assert_eq!(layout["subtitle_tracks"][0]["track_no"], 1);
}

#[test]
fn test_cli_removes_track() {
    let Some((temp, sample)) = sample_or_skip() else {
        return;
    };
    let out_dir = temp.path().join("out");

    trackstrip_cmd(temp.path())
        .args(["--keep-audio", "en", "-o"])
        .arg(&out_dir)
        .arg(&sample)
        .assert()
        .success()
        .stderr(predicate::str::contains("Removing audio: Russian"))
        .stderr(predicate::str::contains(
            "Remaining audio: English; subtitles: English",
        ))
        .stdout(predicate::str::contains("sample.cleaned.mkv"));

    let cleaned = out_dir.join("sample.cleaned.mkv");
    assert!(cleaned.exists());

    let output = trackstrip_cmd(temp.path())
        .args(["--list", "--json"])
        .arg(&cleaned)
        .output()
        .unwrap();
    let layout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(layout["audio_tracks"].as_array().unwrap().len(), 1);
}

#[test]
fn test_cli_overwrite_replaces_input() {
    let Some((temp, sample)) = sample_or_skip() else {
        return;
    };

    trackstrip_cmd(temp.path())
        .args(["--remove-subtitles", "1", "--overwrite"])
        .arg(&sample)
        .assert()
        .success()
        .stdout(predicate::str::contains("sample.mkv"));

    assert!(sample.exists());
    assert!(!temp.path().join("sample.cleaned.mkv").exists());
}
