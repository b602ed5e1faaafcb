//! qmeas Command-Line Interface
//!
//! Inspect, compose and compare observables stored as JSON IR files.
//!
//! ```text
//! qmeas inspect zix.json
//! qmeas compose zix.json y.json --output zixy.json
//! qmeas equiv x.json hermitian_x.json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{compose, equiv, inspect, version};
use config::Config;

/// qmeas - observable algebra and measurement IR tooling
#[derive(Parser)]
#[command(name = "qmeas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML configuration file
    #[arg(long, env = "QMEAS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Relative tolerance for matrix comparisons
    #[arg(long, env = "QMEAS_RTOL", global = true)]
    rtol: Option<f64>,

    /// Absolute tolerance for matrix comparisons
    #[arg(long, env = "QMEAS_ATOL", global = true)]
    atol: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show qubit count, symbols, IR, eigenvalues and basis rotation of an observable
    Inspect {
        /// Input file (observable IR as JSON)
        input: String,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Tensor-compose observables left to right
    Compose {
        /// Input files (observable IR as JSON), at least one
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check whether two observables have the same matrix
    Equiv {
        /// First observable
        lhs: String,

        /// Second observable
        rhs: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = Config::load(cli.config.as_deref()).map(|c| c.with_overrides(cli.rtol, cli.atol));

    // Execute command
    let result = result.and_then(|config| match cli.command {
        Commands::Inspect { input, format } => inspect::execute(&input, format.as_deref(), &config),
        Commands::Compose { inputs, output } => compose::execute(&inputs, output.as_deref()),
        Commands::Equiv { lhs, rhs } => equiv::execute(&lhs, &rhs, &config),
        Commands::Version => {
            version::execute();
            Ok(())
        }
    });

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
