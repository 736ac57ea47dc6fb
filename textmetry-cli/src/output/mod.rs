//! Output formatting module

use anyhow::Result;
use std::io::Write;
use textmetry_core::{AnalysisResult, Score};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the analysis of a single document
    fn format_report(&mut self, source: &str, result: &AnalysisResult) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON array of reports
    Json,
    /// Markdown tables
    Markdown,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Parse a format name from a config file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }

    /// Canonical format name
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Human-readable report per document",
            OutputFormat::Json => "JSON array with full statistics and tagged scores",
            OutputFormat::Markdown => "Markdown tables per document",
        }
    }
}

/// Options shared by all formatters
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Decimal places for scores and averages
    pub decimals: usize,
    /// Indent JSON output
    pub pretty_json: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: 1,
            pretty_json: true,
        }
    }
}

/// Create a formatter for `format` writing to `writer`
pub fn create_formatter<W: Write + Send + Sync + 'static>(
    format: OutputFormat,
    writer: W,
    options: FormatOptions,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.decimals)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options.decimals)),
    }
}

/// Render a score with fixed precision, or a marker when there is none
pub fn format_score(score: Score, decimals: usize) -> String {
    match score {
        Score::Value(v) => format!("{v:.decimals$}"),
        Score::NotComputable => "n/a".to_string(),
        Score::NotApplicable => "n/a (needs 30+ sentences)".to_string(),
    }
}

/// Render whole seconds as `Xm Ys`, or `Ys` under a minute
pub fn format_duration(seconds: u64) -> String {
    let (m, s) = (seconds / 60, seconds % 60);
    if m == 0 {
        format!("{s}s")
    } else {
        format!("{m}m {s}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Score::Value(7.256), 1), "7.3");
        assert_eq!(format_score(Score::Value(7.256), 2), "7.26");
        assert_eq!(format_score(Score::NotComputable, 1), "n/a");
        assert!(format_score(Score::NotApplicable, 1).contains("30+ sentences"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(60), "1m 0s");
        assert_eq!(format_duration(92), "1m 32s");
    }

    #[test]
    fn test_format_names() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_name(format.as_str()), Some(format));
        }
        assert_eq!(OutputFormat::from_name("MD"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }
}
