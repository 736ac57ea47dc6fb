//! Text statistics and readability analysis
//!
//! This crate turns raw natural-language text into structural counts, a
//! syllable estimate, frequency statistics, four readability scores and
//! reading/speaking time estimates. Every analysis is a pure function of
//! its input: no caching, no shared state.
//!
//! # Architecture
//!
//! - **Domain layer**: tokenizer, syllable estimator, statistics
//!   aggregator, readability formulas and time estimator as free functions
//! - **API layer**: configuration, input sources and the result type
//!
//! # Example
//!
//! ```rust
//! use textmetry_core::{analyze, Score};
//!
//! let result = analyze("The quick brown fox jumps over the lazy dog.");
//!
//! assert_eq!(result.statistics.word_count, 9);
//! assert_eq!(result.statistics.sentence_count, 1);
//! assert_eq!(result.statistics.longest_word.as_deref(), Some("quick"));
//!
//! // SMOG needs at least 30 sentences
//! assert_eq!(result.readability.smog, Score::NotApplicable);
//! ```

pub mod api;
pub mod domain;

pub use api::{
    AnalysisResult, AnalyzerConfig, AnalyzerConfigBuilder, Error, Input, Result, TextAnalyzer,
};
pub use domain::{
    estimate_syllables, estimate_times, estimate_times_with, tokenize, ReadabilityScores, Score,
    Statistics, TimeEstimate, Token, Tokens, WordFrequency,
};

/// Analyse a document with default settings
pub fn analyze(text: &str) -> AnalysisResult {
    TextAnalyzer::new().analyze(text)
}
