//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use revisit_core::{ComponentKind, OperationKind};

/// Revisit - Run visitor operations over element sequences
#[derive(Parser)]
#[command(name = "revisit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run operations over an element sequence
    Run {
        /// Elements to visit, in order (overrides the config)
        elements: Vec<ComponentKind>,

        /// Operation to run; repeat for several passes (overrides the config)
        #[arg(short = 'o', long = "operation", value_name = "OPERATION")]
        operations: Vec<OperationKind>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Run passes on a thread pool
        #[arg(long)]
        parallel: bool,
    },

    /// List known element variants and operations
    List,

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
