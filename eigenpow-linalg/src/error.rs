//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Cannot divide by zero")]
    DivideByZero,

    /// The iterate collapsed to the zero vector and cannot be renormalized.
    #[error("Zero vector encountered at iteration {iteration}")]
    SingularIteration { iteration: usize },

    #[error("Tolerance must be finite and positive, got {tol}")]
    InvalidTolerance { tol: f64 },

    #[error("Iteration cap must be at least 1")]
    InvalidMaxIter,

    /// The iterate or its Rayleigh quotient left the finite range.
    #[error("Non-finite value encountered at iteration {iteration}")]
    NonFinite { iteration: usize },

    #[error("Vector has no elements")]
    EmptyVector,

    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,

    #[error("Row {row} has {got} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Power iteration failed to converge after {max_iter} iterations (residual: {residual:.2e})")]
    DidNotConverge { max_iter: usize, residual: f64 },
}

impl LinalgError {
    /// Fail with `DimensionMismatch` unless `got == expected`.
    pub(crate) fn check_dim(expected: usize, got: usize) -> Result<(), LinalgError> {
        if expected == got {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch { expected, got })
        }
    }
}
