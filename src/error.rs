//! Error types for name screening operations.

use thiserror::Error;

/// Errors that can occur while screening a candidate name.
///
/// Metric computation itself is infallible; these errors originate only at
/// the boundaries (reference data, candidate validation, narrative service)
/// and never invalidate a ranking that has already been computed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// The reference list is empty.
    ///
    /// Ranking cannot proceed without at least one registered name to
    /// compare against. Surfaced to the caller, not retried.
    #[error("reference list is empty; nothing to screen against")]
    NoReferenceData,

    /// The candidate name is empty.
    ///
    /// Rejected before any metric computation. Leading and trailing
    /// whitespace is trimmed first, so an all-whitespace candidate is
    /// also invalid.
    #[error("candidate name is empty")]
    InvalidName,

    /// The narrative-generation service failed or returned no content.
    ///
    /// Recovered locally: the ranking result remains valid and usable,
    /// only the narrative and the exported report are skipped.
    #[error("narrative service failure: {0}")]
    ExternalServiceFailure(String),
}

/// A specialized `Result` type for screening operations.
pub type Result<T> = std::result::Result<T, ScreenError>;
