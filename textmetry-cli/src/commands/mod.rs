//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

use crate::output::OutputFormat;

pub mod analyze;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze text files for statistics and readability
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List readability scores and their validity rules
    Scores,
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        for line in self.lines() {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|f| format!("{:<10}{}", f.as_str(), f.description()))
                .collect(),
            ListCommands::Scores => vec![
                "flesch-kincaid  0.39*(W/S) + 11.8*(Syl/W) - 15.59   needs words and sentences"
                    .to_string(),
                "gunning-fog     0.4*((W/S) + 100*(C/W))            needs words and sentences"
                    .to_string(),
                "coleman-liau    0.0588*L - 0.296*S - 15.8           needs words".to_string(),
                "smog            1.0430*sqrt(C*30/S) + 3.1291        needs 30+ sentences"
                    .to_string(),
            ],
        }
    }
}
