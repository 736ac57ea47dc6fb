//! Configuration API for text analysis

use crate::api::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Silent reading rate in words per minute
    pub const READING_WPM: u32 = crate::domain::READING_WPM;

    /// Reading-aloud rate in words per minute
    pub const SPEAKING_WPM: u32 = crate::domain::SPEAKING_WPM;

    /// Entries kept when a caller asks for the top words
    pub const TOP_WORDS: usize = 10;
}

/// Analysis configuration
///
/// Loaded from TOML, every key is optional:
///
/// ```toml
/// reading_wpm = 200
/// speaking_wpm = 130
/// top_words = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub(crate) reading_wpm: u32,
    pub(crate) speaking_wpm: u32,
    pub(crate) top_words: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            reading_wpm: defaults::READING_WPM,
            speaking_wpm: defaults::SPEAKING_WPM,
            top_words: defaults::TOP_WORDS,
        }
    }
}

impl AnalyzerConfig {
    /// Create a configuration builder
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Infrastructure(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, Error> {
        toml::to_string(self)
            .map_err(|e| Error::Configuration(format!("Failed to serialize config: {e}")))
    }

    /// Silent reading rate in words per minute
    pub fn reading_wpm(&self) -> u32 {
        self.reading_wpm
    }

    /// Reading-aloud rate in words per minute
    pub fn speaking_wpm(&self) -> u32 {
        self.speaking_wpm
    }

    /// Number of entries reported by [`crate::AnalysisResult::top_words`]
    pub fn top_words(&self) -> usize {
        self.top_words
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.reading_wpm == 0 {
            return Err(Error::Configuration(
                "reading_wpm must be greater than 0".into(),
            ));
        }

        if self.speaking_wpm == 0 {
            return Err(Error::Configuration(
                "speaking_wpm must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    reading_wpm: Option<u32>,
    speaking_wpm: Option<u32>,
    top_words: Option<usize>,
}

impl AnalyzerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            reading_wpm: Some(config.reading_wpm),
            speaking_wpm: Some(config.speaking_wpm),
            top_words: Some(config.top_words),
        }
    }

    /// Set the silent reading rate
    pub fn reading_wpm(mut self, wpm: u32) -> Self {
        self.reading_wpm = Some(wpm);
        self
    }

    /// Set the reading-aloud rate
    pub fn speaking_wpm(mut self, wpm: u32) -> Self {
        self.speaking_wpm = Some(wpm);
        self
    }

    /// Set how many top words are reported
    pub fn top_words(mut self, count: usize) -> Self {
        self.top_words = Some(count);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalyzerConfig, Error> {
        let mut config = AnalyzerConfig::default();

        if let Some(wpm) = self.reading_wpm {
            config.reading_wpm = wpm;
        }

        if let Some(wpm) = self.speaking_wpm {
            config.speaking_wpm = wpm;
        }

        if let Some(count) = self.top_words {
            config.top_words = count;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.reading_wpm(), 200);
        assert_eq!(config.speaking_wpm(), 130);
        assert_eq!(config.top_words(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalyzerConfig::builder()
            .reading_wpm(250)
            .speaking_wpm(150)
            .top_words(3)
            .build()
            .unwrap();
        assert_eq!(config.reading_wpm(), 250);
        assert_eq!(config.speaking_wpm(), 150);
        assert_eq!(config.top_words(), 3);
    }

    #[test]
    fn test_builder_rejects_zero_rates() {
        let err = AnalyzerConfig::builder().reading_wpm(0).build().unwrap_err();
        assert!(err.to_string().contains("reading_wpm must be greater than 0"));

        let err = AnalyzerConfig::builder()
            .speaking_wpm(0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("speaking_wpm"));
    }

    #[test]
    fn test_builder_from_config() {
        let base = AnalyzerConfig::builder().reading_wpm(180).build().unwrap();
        let derived = AnalyzerConfigBuilder::from_config(&base)
            .top_words(5)
            .build()
            .unwrap();
        assert_eq!(derived.reading_wpm(), 180);
        assert_eq!(derived.top_words(), 5);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AnalyzerConfig::from_toml_str("reading_wpm = 240\n").unwrap();
        assert_eq!(config.reading_wpm(), 240);
        assert_eq!(config.speaking_wpm(), 130);
    }

    #[test]
    fn test_from_toml_empty_is_default() {
        assert_eq!(
            AnalyzerConfig::from_toml_str("").unwrap(),
            AnalyzerConfig::default()
        );
    }

    #[test]
    fn test_from_toml_errors() {
        assert!(matches!(
            AnalyzerConfig::from_toml_str("speaking_wpm = 0"),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            AnalyzerConfig::from_toml_str("unknown_key = 1"),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            AnalyzerConfig::from_toml_str("reading_wpm = \"fast\""),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_toml_roundtrip_of_custom_values() {
        let config = AnalyzerConfig::builder().top_words(7).build().unwrap();
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("top_words = 7"));
        assert_eq!(AnalyzerConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_from_missing_file() {
        let result = AnalyzerConfig::from_file("/nonexistent/textmetry.toml");
        assert!(matches!(result, Err(Error::Infrastructure(_))));
    }
}
