//! trackstrip-core: track filtering decisions and shared types.
//!
//! This crate holds everything in trackstrip that makes a decision, and none of
//! the I/O:
//!
//! - **Language normalization**: fold codes and names into display names
//! - **Filter parsing**: split `"eng,2,jpn"` into track numbers and terms
//! - **Filter resolution**: combine generic and per-stream options, reject
//!   conflicting combinations, drop keep/remove overlaps
//! - **Classification**: partition a file's tracks into kept and removed
//! - **Path utilities**: recognize media files by extension
//!
//! # Examples
//!
//! ```
//! use trackstrip_core::{FilterOptions, Track};
//!
//! let options = FilterOptions {
//!     keep_audio: Some("en,jpn".to_string()),
//!     remove_subtitles: Some("2".to_string()),
//!     ..Default::default()
//! };
//! let filters = options.resolve()?;
//!
//! let audio = Track::from_tags([Some("eng"), Some("ger"), Some("jpn")]);
//! let partition = filters.audio.classify(&audio);
//! assert_eq!(partition.kept_indices(), vec![0, 2]);
//! # Ok::<(), trackstrip_core::Error>(())
//! ```

pub mod decision;
pub mod error;
pub mod filter;
pub mod language;
pub mod paths;
pub mod resolve;
pub mod track;

pub use decision::{classify, Partition};
pub use error::{Error, Result};
pub use filter::FilterSpec;
pub use language::{normalize_language, normalize_tag, UNDETERMINED};
pub use resolve::{FilterOptions, OverlapWarning, ResolvedFilters, StreamFilters};
pub use track::{StreamKind, Track};
