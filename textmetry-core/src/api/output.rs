//! Output types for the analysis API

use serde::{Deserialize, Serialize};

use crate::domain::{ReadabilityScores, Statistics, TimeEstimate, WordFrequency};

/// Complete, immutable result of analysing one document
///
/// Two analyses of the same text with the same configuration compare
/// equal; nothing time- or run-dependent is recorded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Counts, extremes and frequencies
    pub statistics: Statistics,
    /// Grade-level scores
    pub readability: ReadabilityScores,
    /// Reading and speaking time
    pub times: TimeEstimate,
    /// Most frequent words, highest count first
    pub top_words: Vec<WordFrequency>,
}

impl AnalysisResult {
    /// Whether the document contained no words
    pub fn is_empty(&self) -> bool {
        self.statistics.word_count == 0
    }
}
