//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::{AnalysisOverrides, CliConfig};
use crate::output::OutputFormat;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Reading rate: {} wpm", config.analysis.reading_wpm);
                println!("  Speaking rate: {} wpm", config.analysis.speaking_wpm);
                println!("  Output format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }

    /// Parse the file and run every check `analyze` would run
    fn check(path: &std::path::Path) -> Result<CliConfig> {
        let config = CliConfig::load(path)?;
        config.analyzer_config(AnalysisOverrides::default())?;
        if OutputFormat::from_name(&config.output.default_format).is_none() {
            anyhow::bail!(
                "Unknown output format '{}'",
                config.output.default_format
            );
        }
        Ok(config)
    }
}
