//! Built-in demonstration.
//!
//! eigenpow demo [--json]

use std::io::Write;

use anyhow::Result;
use clap::Args;
use tracing::info;

use eigenpow_linalg::{ColVector, Matrix, PowerIteration, RowVector};

use super::report;

#[derive(Args)]
pub struct DemoArgs {
    /// Print the eigenpair as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn demo_matrix() -> Result<Matrix> {
    Ok(Matrix::from_rows(&[
        vec![2.0, 4.0, 6.0],
        vec![3.0, 6.0, 9.0],
        vec![4.0, 8.0, 12.0],
    ])?)
}

pub fn run(args: DemoArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_demo(&mut out, args.json)
}

fn write_demo<W: Write>(out: &mut W, json: bool) -> Result<()> {
    let m = demo_matrix()?;
    let va = ColVector::from_slice(&[1.0, 2.0, 3.0]);
    let vb = RowVector::from_slice(&[3.0, 6.0, 9.0]);

    info!(
        "Multiplying row vector of size {} by {}x{} matrix",
        vb.len(),
        m.nrows(),
        m.ncols()
    );
    let product = vb.vec_mat(&m)?;
    writeln!(out, "{}", product)?;

    info!("Running power iteration from start vector of size {}", va.len());
    let pair = PowerIteration::default().solve(&m, &va)?;
    if json {
        report::write_json(out, &pair)
    } else {
        report::write_text(out, &m, &pair)
    }
}
