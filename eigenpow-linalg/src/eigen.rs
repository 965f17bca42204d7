//! Power iteration for the dominant eigenpair of a square matrix.
//!
//! Each step multiplies the current unit iterate by A, takes the
//! Rayleigh quotient against the previous iterate, and renormalizes.
//! The loop stops once `|‖A x‖² − λ²|` falls below the tolerance, which
//! is zero exactly when x is an eigenvector of A.

use tracing::{debug, info, warn};

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::vector::ColVector;

/// Power-iteration solver settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerIteration {
    /// Convergence threshold on `|‖A x‖² − λ²|`. Must be positive.
    pub tol: f64,
    /// Maximum number of matrix-vector products. Must be at least 1.
    pub max_iter: usize,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            tol: 1e-9,
            max_iter: 1000,
        }
    }
}

/// Result of a converged power iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenPair {
    /// Estimate of the eigenvalue of largest magnitude.
    pub eigenvalue: f64,
    /// Unit-length (L2) eigenvector estimate.
    pub eigenvector: ColVector,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Final value of `|‖A x‖² − λ²|`.
    pub residual: f64,
}

impl PowerIteration {
    pub fn new(tol: f64, max_iter: usize) -> Self {
        Self { tol, max_iter }
    }

    /// Run power iteration on `a` starting from `x0`.
    ///
    /// `x0` must not be orthogonal to the dominant eigenspace; if it is,
    /// the iteration settles on whichever eigenvector it can reach.
    /// Matrices whose two largest eigenvalues share a magnitude but not
    /// a sign oscillate and end in `DidNotConverge`.
    ///
    /// The tolerance is absolute, so it is compared against a quantity
    /// of the order of λ². Entries near `f64::MAX` can still overflow the
    /// product `A x`; that, or a NaN/infinite input, fails with
    /// `NonFinite` rather than being mistaken for a zero iterate.
    pub fn solve(&self, a: &Matrix, x0: &ColVector) -> Result<EigenPair, LinalgError> {
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(LinalgError::InvalidTolerance { tol: self.tol });
        }
        if self.max_iter == 0 {
            return Err(LinalgError::InvalidMaxIter);
        }
        LinalgError::check_dim(a.nrows(), a.ncols())?;
        LinalgError::check_dim(a.ncols(), x0.len())?;
        let start_norm = x0.norm2();
        if !start_norm.is_finite() {
            return Err(LinalgError::NonFinite { iteration: 0 });
        }
        if start_norm == 0.0 {
            return Err(LinalgError::SingularIteration { iteration: 0 });
        }

        let mut x = x0.clone();
        let mut residual = f64::INFINITY;

        for iter in 1..=self.max_iter {
            let v = a.mat_vec(&x)?;
            let lambda = x.transpose().inner(&v)?;

            let norm = v.norm2();
            if !(norm.is_finite() && lambda.is_finite()) {
                return Err(LinalgError::NonFinite { iteration: iter });
            }
            if norm == 0.0 {
                return Err(LinalgError::SingularIteration { iteration: iter });
            }
            x = v.div(norm)?;

            // |‖v‖² − λ²| in factored form, so large eigenvalues do not
            // overflow before the difference is taken
            let mag = lambda.abs();
            residual = ((norm - mag) * (norm + mag)).abs();
            debug!(
                "Power iteration {}: lambda={:.10}, residual={:.2e}",
                iter, lambda, residual
            );

            if residual < self.tol {
                info!("Power iteration converged after {} iterations", iter);
                return Ok(EigenPair {
                    eigenvalue: lambda,
                    eigenvector: x,
                    iterations: iter,
                    residual,
                });
            }
        }

        warn!(
            "Power iteration did not converge after {} iterations (residual {:.2e})",
            self.max_iter, residual
        );
        Err(LinalgError::DidNotConverge {
            max_iter: self.max_iter,
            residual,
        })
    }
}

/// Dominant eigenpair of `a` with tolerance `err` and the default
/// iteration cap.
pub fn power_method(a: &Matrix, x0: &ColVector, err: f64) -> Result<EigenPair, LinalgError> {
    PowerIteration {
        tol: err,
        ..PowerIteration::default()
    }
    .solve(a, x0)
}
