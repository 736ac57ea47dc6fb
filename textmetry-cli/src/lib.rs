//! textmetry CLI library
//!
//! This library provides the command-line interface for the textmetry
//! text statistics and readability engine.

use clap::Parser;

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

/// Text statistics and readability analysis
#[derive(Debug, Parser)]
#[command(name = "textmetry", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: commands::Commands,
}

impl Cli {
    /// Run the parsed command
    pub fn run(&self) -> CliResult<()> {
        self.command.execute()
    }
}
