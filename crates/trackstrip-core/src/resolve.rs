//! Combining generic and per-stream filter options.
//!
//! `--keep`/`--remove` apply to audio and subtitles alike; the per-stream
//! options target one kind. The two families are mutually exclusive, so after
//! validation every stream kind has exactly one source for each of its keep and
//! remove specs.

use crate::decision::{classify, Partition};
use crate::error::{Error, Result};
use crate::filter::FilterSpec;
use crate::track::{StreamKind, Track};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw filter options as given by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub keep: Option<String>,
    pub remove: Option<String>,
    pub keep_audio: Option<String>,
    pub remove_audio: Option<String>,
    pub keep_subtitles: Option<String>,
    pub remove_subtitles: Option<String>,
    /// Legacy spelling of `keep_subtitles`, used only when that is absent.
    pub keep_subtitle: Option<String>,
    /// Legacy spelling of `remove_subtitles`, used only when that is absent.
    pub remove_subtitle: Option<String>,
}

/// Keep and remove specs for one stream kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamFilters {
    pub keep: FilterSpec,
    pub remove: FilterSpec,
}

impl StreamFilters {
    /// Classify `tracks` against these filters.
    pub fn classify(&self, tracks: &[Track]) -> Partition {
        classify(tracks, &self.keep, &self.remove)
    }

    /// True when no filtering is configured.
    pub fn is_empty(&self) -> bool {
        self.keep.is_empty() && self.remove.is_empty()
    }

    /// Drop remove terms that also appear in the keep terms.
    fn strip_overlap(&mut self, kind: StreamKind) -> Vec<OverlapWarning> {
        let mut warnings = Vec::new();
        let keep = &self.keep;

        self.remove.terms.retain(|term| {
            if keep.contains_term(term) {
                warnings.push(OverlapWarning {
                    kind,
                    term: term.clone(),
                });
                false
            } else {
                true
            }
        });

        warnings
    }
}

/// A term listed for both keeping and removing on the same stream kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapWarning {
    pub kind: StreamKind,
    pub term: String,
}

impl fmt::Display for OverlapWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' appears in both keep and remove for {}; ignoring it in remove",
            self.term, self.kind
        )
    }
}

/// Per-stream filters for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFilters {
    pub audio: StreamFilters,
    pub subtitles: StreamFilters,
    /// Terms dropped from remove lists because they were also kept.
    pub warnings: Vec<OverlapWarning>,
}

impl ResolvedFilters {
    /// Filters for the given stream kind.
    pub fn for_kind(&self, kind: StreamKind) -> &StreamFilters {
        match kind {
            StreamKind::Audio => &self.audio,
            StreamKind::Subtitle => &self.subtitles,
        }
    }

    /// True when neither stream kind is filtered.
    pub fn is_empty(&self) -> bool {
        self.audio.is_empty() && self.subtitles.is_empty()
    }
}

fn present(option: &Option<String>) -> Option<&str> {
    option.as_deref().filter(|s| !s.is_empty())
}

impl FilterOptions {
    /// Apply legacy aliases: `keep_subtitle`/`remove_subtitle` fill in the
    /// plural options when those are absent.
    fn effective_subtitles(&self) -> (Option<&str>, Option<&str>) {
        let keep = present(&self.keep_subtitles).or_else(|| present(&self.keep_subtitle));
        let remove = present(&self.remove_subtitles).or_else(|| present(&self.remove_subtitle));
        (keep, remove)
    }

    /// Check that generic and per-stream options are not combined.
    pub fn validate(&self) -> Result<()> {
        let (keep_subtitles, remove_subtitles) = self.effective_subtitles();

        if present(&self.remove).is_some()
            && (present(&self.remove_audio).is_some() || remove_subtitles.is_some())
        {
            return Err(Error::conflicting(
                "-r/--remove",
                "--remove-audio or --remove-subtitles",
            ));
        }

        if present(&self.keep).is_some()
            && (present(&self.keep_audio).is_some() || keep_subtitles.is_some())
        {
            return Err(Error::conflicting(
                "-k/--keep",
                "--keep-audio or --keep-subtitles",
            ));
        }

        Ok(())
    }

    /// Validate and resolve into per-stream keep/remove specs.
    ///
    /// Remove terms that are also kept (ignoring case) are dropped and
    /// reported in [`ResolvedFilters::warnings`]. Terms are left as typed;
    /// normalization happens at match time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingFilters`] if a generic option is combined
    /// with a per-stream option of the same family.
    pub fn resolve(&self) -> Result<ResolvedFilters> {
        self.validate()?;

        let (keep_subtitles, remove_subtitles) = self.effective_subtitles();

        let mut resolved = ResolvedFilters::default();

        if let Some(keep) = present(&self.keep) {
            let spec = FilterSpec::parse(Some(keep));
            resolved.audio.keep = spec.clone();
            resolved.subtitles.keep = spec;
        }
        if let Some(remove) = present(&self.remove) {
            let spec = FilterSpec::parse(Some(remove));
            resolved.audio.remove = spec.clone();
            resolved.subtitles.remove = spec;
        }
        if let Some(keep_audio) = present(&self.keep_audio) {
            resolved.audio.keep = FilterSpec::parse(Some(keep_audio));
        }
        if let Some(keep_subtitles) = keep_subtitles {
            resolved.subtitles.keep = FilterSpec::parse(Some(keep_subtitles));
        }
        if let Some(remove_audio) = present(&self.remove_audio) {
            resolved.audio.remove = FilterSpec::parse(Some(remove_audio));
        }
        if let Some(remove_subtitles) = remove_subtitles {
            resolved.subtitles.remove = FilterSpec::parse(Some(remove_subtitles));
        }

        let mut warnings = resolved.audio.strip_overlap(StreamKind::Audio);
        warnings.extend(resolved.subtitles.strip_overlap(StreamKind::Subtitle));

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        resolved.warnings = warnings;

        tracing::debug!(
            audio_keep = %resolved.audio.keep,
            audio_remove = %resolved.audio.remove,
            subtitle_keep = %resolved.subtitles.keep,
            subtitle_remove = %resolved.subtitles.remove,
            "Resolved track filters"
        );

        Ok(resolved)
    }
}
