//! trackstrip - remove unwanted audio and subtitle tracks from media files
//!
//! This library crate exposes the CLI's building blocks for integration testing.

pub mod config;
pub mod processor;
pub mod report;
pub mod scanner;
