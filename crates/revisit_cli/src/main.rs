//! Revisit CLI
//!
//! Runs visitor operations over element sequences.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_init, run_list, run_passes};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Run {
            elements,
            operations,
            format,
            parallel,
        } => run_passes(&cli, elements, operations, *format, *parallel),
        Commands::List => {
            run_list();
            Ok(())
        }
        Commands::Init { force } => run_init(*force),
    }
}
