//! Dominant eigenpair of a matrix read from a JSON file.
//!
//! eigenpow eigen --input problem.json [--tol 1e-9] [--max-iter 1000] [--json]
//!
//! Input format:
//! {"matrix": [[2, 1], [1, 2]], "initial": [1, 0], "tol": 1e-12, "max_iter": 500}
//! Only `matrix` is required. Command-line flags override file values.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use tracing::{debug, info};

use eigenpow_linalg::{ColVector, Matrix, PowerIteration};

use super::report;

#[derive(Args)]
pub struct EigenArgs {
    /// JSON file holding the matrix and optional solver settings
    #[arg(long)]
    input: PathBuf,

    /// Convergence tolerance on |‖Ax‖² − λ²|
    #[arg(long)]
    tol: Option<f64>,

    /// Maximum number of iterations
    #[arg(long)]
    max_iter: Option<usize>,

    /// Print the eigenpair as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Problem description as stored on disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    pub matrix: Vec<Vec<f64>>,
    #[serde(default)]
    pub initial: Option<Vec<f64>>,
    #[serde(default)]
    pub tol: Option<f64>,
    #[serde(default)]
    pub max_iter: Option<usize>,
}

impl Problem {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse problem file {}", path.display()))
    }

    /// Solver settings: flag, then file value, then the default.
    fn solver(&self, tol: Option<f64>, max_iter: Option<usize>) -> PowerIteration {
        let defaults = PowerIteration::default();
        PowerIteration::new(
            tol.or(self.tol).unwrap_or(defaults.tol),
            max_iter.or(self.max_iter).unwrap_or(defaults.max_iter),
        )
    }

    /// Start vector from the file, or all ones.
    fn start_vector(&self, n: usize) -> ColVector {
        match &self.initial {
            Some(x0) => ColVector::from_slice(x0),
            None => ColVector::full(n, 1.0),
        }
    }
}

pub fn run(args: EigenArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    solve_file(&mut out, &args)
}

fn solve_file<W: Write>(out: &mut W, args: &EigenArgs) -> Result<()> {
    let problem = Problem::load(&args.input)?;
    let a = Matrix::from_rows(&problem.matrix)
        .with_context(|| format!("Invalid matrix in {}", args.input.display()))?;
    let x0 = problem.start_vector(a.ncols());
    let solver = problem.solver(args.tol, args.max_iter);

    info!(
        "Solving {}x{} matrix from {}",
        a.nrows(),
        a.ncols(),
        args.input.display()
    );
    debug!("Solver settings: {:?}", solver);

    let pair = solver
        .solve(&a, &x0)
        .with_context(|| format!("Power iteration failed for {}", args.input.display()))?;

    if args.json {
        report::write_json(out, &pair)
    } else {
        report::write_text(out, &a, &pair)
    }
}
