//! Media file probing.
//!
//! Only the stream layout matters to trackstrip: how many video streams a file
//! has, and the index and language tag of every audio and subtitle stream.

mod ffprobe;
mod types;

pub use ffprobe::{parse_ffprobe_json, probe_with_ffprobe};
pub use types::*;
