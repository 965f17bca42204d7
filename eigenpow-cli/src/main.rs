//! eigenpow: dense linear algebra and power iteration from the command line.
//!
//! CLI entry point using clap for argument parsing.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "eigenpow",
    version,
    about = "Dominant eigenpair of a dense matrix by power iteration",
    long_about = "Small dense linear-algebra toolkit.\n\
                   Runs power iteration on a matrix read from JSON, or a built-in demo."
)]
struct Cli {
    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Multiply the demo row vector by the demo matrix, then solve its eigenpair
    Demo(commands::demo::DemoArgs),

    /// Find the dominant eigenpair of a matrix stored in a JSON file
    Eigen(commands::eigen::EigenArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("eigenpow v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Demo(args) => commands::demo::run(args),
        Commands::Eigen(args) => commands::eigen::run(args),
    }
}
