// src/numerics/types/error.rs
// Error type for vector operations that have no result.

/// Errors raised by vector operations that have no meaningful result.
///
/// Only two operations fail: normalizing a vector and measuring the angle
/// between two vectors, both when a length involved is not positive.
/// Degenerate divisions elsewhere propagate IEEE-754 infinities and NaNs
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    #[error("cannot {operation}: zero length")]
    ZeroLength { operation: &'static str },
}

impl VectorError {
    pub(crate) fn zero_length(operation: &'static str) -> Self {
        Self::ZeroLength { operation }
    }

    /// Name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::ZeroLength { operation } => *operation,
        }
    }
}
