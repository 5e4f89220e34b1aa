//! Error types and result handling for the detection core.
//!
//! The only failure surface of the core is construction-time dimension
//! validation; once a snapshot exists, detection cannot fail.

use core::fmt;

/// Result type alias for snapshot construction.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors raised while constructing a [`ResourceSnapshot`].
///
/// [`ResourceSnapshot`]: crate::snapshot::ResourceSnapshot
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SnapshotError {
    /// Matrix or vector shapes are inconsistent. The payload names the
    /// offending input.
    InvalidDimensions(&'static str),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions(what) => {
                write!(f, "invalid input dimensions for {what}")
            }
        }
    }
}

impl core::error::Error for SnapshotError {}
