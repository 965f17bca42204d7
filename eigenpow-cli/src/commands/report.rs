//! Rendering of solver results, shared by the subcommands.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use eigenpow_linalg::{EigenPair, Matrix};

/// Serializable form of an `EigenPair`.
#[derive(Debug, Serialize)]
pub struct EigenReport {
    pub eigenvalue: f64,
    pub eigenvector: Vec<f64>,
    pub iterations: usize,
    pub residual: f64,
}

impl From<&EigenPair> for EigenReport {
    fn from(pair: &EigenPair) -> Self {
        Self {
            eigenvalue: pair.eigenvalue,
            eigenvector: pair.eigenvector.to_vec(),
            iterations: pair.iterations,
            residual: pair.residual,
        }
    }
}

/// Human-readable report: the matrix, the eigenvalue, then the eigenvector.
pub fn write_text<W: Write>(out: &mut W, a: &Matrix, pair: &EigenPair) -> Result<()> {
    writeln!(out, "Matrix")?;
    write!(out, "{}", a)?;
    writeln!(out, "has dominant eigenvalue {}", pair.eigenvalue)?;
    writeln!(out, "with unit eigenvector")?;
    write!(out, "{}", pair.eigenvector)?;
    writeln!(
        out,
        "({} iterations, residual {:.3e})",
        pair.iterations, pair.residual
    )?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, pair: &EigenPair) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &EigenReport::from(pair))?;
    writeln!(out)?;
    Ok(())
}
