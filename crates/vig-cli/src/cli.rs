//! Command-line interface definition.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `vigia` binary.
#[derive(Debug, Parser)]
#[command(name = "vigia", version, about = "Vigia - listing watcher with novelty detection")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one watch pass over the configured sources
    Run {
        /// Restrict the pass to a single configured source
        #[arg(long)]
        source: Option<String>,
    },
    /// List the configured sources
    Sources,
    /// List the most recently seen entries
    History {
        /// Max entries to show
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
}
