//! Quality checks for the deform kernel workspace.
//!
//! # Commands
//!
//! - `cargo xtask check` - Run all quality checks, report failures
//! - `cargo xtask check --ci` - Same, but exit non-zero on any failure
//! - `cargo xtask ci` - Full CI suite, step by step
//! - `cargo xtask layer0` - Verify the kernel crates stay host-free
//!
//! # Standard
//!
//! 1. Formatting - `cargo fmt` clean
//! 2. Clippy - Zero warnings, all targets and features
//! 3. Tests - All pass with all features
//! 4. Documentation - Zero rustdoc warnings
//! 5. Safety - Zero unwrap/expect in library code
//! 6. Layer 0 - No engine, GPU or host crates in the kernel dependency trees

mod check;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Deform kernel quality checks
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Quality checks for the deform kernel workspace", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all quality checks across the workspace
    Check {
        /// Run in CI mode (fails on any issue)
        #[arg(long)]
        ci: bool,
    },

    /// Run the full CI suite
    Ci,

    /// Verify that kernel crates pull in no host or engine dependencies
    Layer0,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { ci } => check::run(ci),
        Commands::Ci => check::run_ci(),
        Commands::Layer0 => check::run_layer0(),
    }
}
