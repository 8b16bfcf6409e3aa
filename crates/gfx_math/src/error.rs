//! Errors reported by the checked operations.

use thiserror::Error;

/// Failure of a checked vector or matrix operation.
///
/// The unchecked operations never return these: they let the division by
/// zero through and produce non-finite values instead.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathError {
    #[error("Matrix is singular (its determinant is zero)")]
    SingularMatrix,

    #[error("Cannot normalize a vector with zero magnitude")]
    ZeroMagnitude,

    #[error("Expected {expected} elements, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
