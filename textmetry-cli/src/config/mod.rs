//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use textmetry_core::{AnalyzerConfig, AnalyzerConfigBuilder};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Silent reading rate in words per minute
    pub reading_wpm: u32,

    /// Reading-aloud rate in words per minute
    pub speaking_wpm: u32,

    /// Number of most frequent words to report
    pub top_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let core = AnalyzerConfig::default();
        Self {
            reading_wpm: core.reading_wpm(),
            speaking_wpm: core.speaking_wpm(),
            top_words: core.top_words(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Decimal places for readability scores in text and markdown output
    pub decimals: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            decimals: 1,
        }
    }
}

/// Command-line values that take precedence over the file
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalysisOverrides {
    /// Reading rate from `--reading-wpm`
    pub reading_wpm: Option<u32>,
    /// Speaking rate from `--speaking-wpm`
    pub speaking_wpm: Option<u32>,
    /// Count from `--top`
    pub top_words: Option<usize>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load from an optional path, falling back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Build the core analyzer configuration, applying overrides
    pub fn analyzer_config(&self, overrides: AnalysisOverrides) -> Result<AnalyzerConfig> {
        let config = AnalyzerConfigBuilder::new()
            .reading_wpm(overrides.reading_wpm.unwrap_or(self.analysis.reading_wpm))
            .speaking_wpm(overrides.speaking_wpm.unwrap_or(self.analysis.speaking_wpm))
            .top_words(overrides.top_words.unwrap_or(self.analysis.top_words))
            .build()
            .map_err(CliError::from)?;
        Ok(config)
    }

    /// Render a commented template of the default configuration
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            r#"# textmetry configuration

[analysis]
# Silent reading rate in words per minute
reading_wpm = {reading}

# Reading-aloud rate in words per minute
speaking_wpm = {speaking}

# Number of most frequent words to report
top_words = {top}

[output]
# One of: text, json, markdown
default_format = "{format}"

# Indent JSON output
pretty_json = {pretty}

# Decimal places for readability scores
decimals = {decimals}
"#,
            reading = defaults.analysis.reading_wpm,
            speaking = defaults.analysis.speaking_wpm,
            top = defaults.analysis.top_words,
            format = defaults.output.default_format,
            pretty = defaults.output.pretty_json,
            decimals = defaults.output.decimals,
        )
    }
}
