//! Common error types used throughout trackstrip.
//!
//! The filtering engine itself never fails; the only error it can produce is a
//! conflicting combination of filter options, which callers must surface before
//! any file is touched.

/// Common error type for trackstrip.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic filter option was combined with a type-specific one.
    #[error("{generic} cannot be combined with {specific}")]
    ConflictingFilters {
        generic: &'static str,
        specific: &'static str,
    },
}

impl Error {
    /// Create a new ConflictingFilters error.
    pub fn conflicting(generic: &'static str, specific: &'static str) -> Self {
        Self::ConflictingFilters { generic, specific }
    }

    /// Whether this error comes from combining mutually exclusive options.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ConflictingFilters { .. })
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
