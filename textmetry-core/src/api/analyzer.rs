//! Main text analyzer implementation

use std::io::Read;

use crate::api::{AnalysisResult, AnalyzerConfig, Error, Input};
use crate::domain::{aggregate, estimate_times_with, score, tokenize};

/// Text analyzer with an immutable configuration
///
/// Holds no state besides its configuration, so one analyzer can be shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    config: AnalyzerConfig,
}

impl TextAnalyzer {
    /// Create an analyzer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Analyse a document
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let tokens = tokenize(text);
        let statistics = aggregate(&tokens, text);
        let readability = score(&statistics);
        let times = estimate_times_with(
            statistics.word_count,
            self.config.reading_wpm,
            self.config.speaking_wpm,
        );
        let top_words = statistics
            .top_words(self.config.top_words)
            .into_iter()
            .cloned()
            .collect();

        AnalysisResult {
            statistics,
            readability,
            times,
            top_words,
        }
    }

    /// Read an input source and analyse its text
    pub fn analyze_input(&self, input: Input) -> Result<AnalysisResult, Error> {
        let text = input.into_text()?;
        Ok(self.analyze(&text))
    }

    /// Analyse everything a reader yields
    pub fn analyze_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<AnalysisResult, Error> {
        self.analyze_input(Input::from_reader(reader))
    }

    /// Analyse independent documents, returning results in input order
    #[cfg(feature = "parallel")]
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        use rayon::prelude::*;

        texts.par_iter().map(|t| self.analyze(t.as_ref())).collect()
    }

    /// Analyse independent documents, returning results in input order
    #[cfg(not(feature = "parallel"))]
    pub fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        texts.iter().map(|t| self.analyze(t.as_ref())).collect()
    }

    /// Get the current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
