use std::collections::TryReserveError;

use thiserror::Error;

/// Failures reported by the fallible entry points.
///
/// Every variant except [`SortError::ScratchAllocation`] is a caller bug; the
/// infallible entry points turn them into panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("range [{left}, {right}] is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds {
        left: usize,
        right: usize,
        len: usize,
    },

    #[error("range [{left}, {right}] is inverted past the empty range")]
    InvertedRange { left: usize, right: usize },

    #[error("workspace window {base}+{len} exceeds its buffer of length {capacity}")]
    WorkspaceBounds {
        base: usize,
        len: usize,
        capacity: usize,
    },

    #[error("scratch allocation failed: {0}")]
    ScratchAllocation(#[from] TryReserveError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
