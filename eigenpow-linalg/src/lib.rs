//! eigenpow-linalg: Dense linear algebra with a power-iteration eigensolver
//!
//! Provides row-major dense matrices, column and row vectors with the
//! usual arithmetic, and power iteration for the eigenvalue of largest
//! magnitude of a square matrix.

pub mod buffer;
pub mod eigen;
pub mod error;
pub mod matrix;
pub mod vector;

pub use buffer::DenseBuffer;
pub use eigen::{power_method, EigenPair, PowerIteration};
pub use error::LinalgError;
pub use matrix::Matrix;
pub use vector::{ColVector, Column, Orientation, Row, RowVector, Vector};
