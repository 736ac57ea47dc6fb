//! Readability formulas over aggregated statistics
//!
//! Each formula guards its own preconditions. A zero denominator yields
//! [`Score::NotComputable`]; SMOG below its sentence threshold yields
//! [`Score::NotApplicable`]. Neither is ever encoded as a number.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::statistics::Statistics;

/// SMOG is only defined for samples of at least this many sentences
pub const SMOG_MIN_SENTENCES: usize = 30;

/// Outcome of a single readability formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Score {
    /// A finite computed score
    Value(f64),
    /// A required denominator (words or sentences) was zero
    NotComputable,
    /// The formula's precondition on sample size was not met
    NotApplicable,
}

impl Score {
    /// The numeric score, if one was computed
    pub fn value(&self) -> Option<f64> {
        match self {
            Score::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Check whether a numeric score was computed
    pub fn is_value(&self) -> bool {
        matches!(self, Score::Value(_))
    }

    /// Wrap a raw result, rejecting non-finite values
    fn finite(raw: f64) -> Self {
        if raw.is_finite() {
            Score::Value(raw)
        } else {
            Score::NotComputable
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Value(v) => match f.precision() {
                Some(p) => write!(f, "{v:.p$}"),
                None => write!(f, "{v}"),
            },
            Score::NotComputable => write!(f, "not computable"),
            Score::NotApplicable => write!(f, "not applicable"),
        }
    }
}

/// The four readability scores of one document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScores {
    /// Flesch-Kincaid Grade Level
    pub flesch_kincaid_grade: Score,
    /// Gunning Fog Index
    pub gunning_fog: Score,
    /// Coleman-Liau Index
    pub coleman_liau: Score,
    /// SMOG Index
    pub smog: Score,
}

impl ReadabilityScores {
    /// Scores paired with their display names, in a fixed order
    pub fn named(&self) -> [(&'static str, Score); 4] {
        [
            ("Flesch-Kincaid Grade", self.flesch_kincaid_grade),
            ("Gunning Fog", self.gunning_fog),
            ("Coleman-Liau", self.coleman_liau),
            ("SMOG", self.smog),
        ]
    }
}

/// Compute all four scores from aggregated statistics
pub fn score(stats: &Statistics) -> ReadabilityScores {
    ReadabilityScores {
        flesch_kincaid_grade: flesch_kincaid_grade(stats),
        gunning_fog: gunning_fog(stats),
        coleman_liau: coleman_liau(stats),
        smog: smog(stats),
    }
}

/// `0.39 * (W/S) + 11.8 * (Syl/W) - 15.59`
pub fn flesch_kincaid_grade(stats: &Statistics) -> Score {
    let (Some(wps), Some(spw)) = (stats.words_per_sentence(), stats.syllables_per_word()) else {
        return Score::NotComputable;
    };
    Score::finite(0.39 * wps + 11.8 * spw - 15.59)
}

/// `0.4 * ((W/S) + 100 * (C/W))`
pub fn gunning_fog(stats: &Statistics) -> Score {
    if stats.word_count == 0 || stats.sentence_count == 0 {
        return Score::NotComputable;
    }
    let words = stats.word_count as f64;
    let wps = words / stats.sentence_count as f64;
    let complex_pct = 100.0 * stats.complex_word_count as f64 / words;
    Score::finite(0.4 * (wps + complex_pct))
}

/// `0.0588 * L - 0.296 * Sn - 15.8` with letters and sentences per 100 words
pub fn coleman_liau(stats: &Statistics) -> Score {
    if stats.word_count == 0 {
        return Score::NotComputable;
    }
    let words = stats.word_count as f64;
    let letters_per_100 = stats.letter_count as f64 / words * 100.0;
    let sentences_per_100 = stats.sentence_count as f64 / words * 100.0;
    Score::finite(0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8)
}

/// `1.0430 * sqrt(C * (30/S)) + 3.1291`, only for 30 or more sentences
pub fn smog(stats: &Statistics) -> Score {
    if stats.sentence_count == 0 {
        return Score::NotComputable;
    }
    if stats.sentence_count < SMOG_MIN_SENTENCES {
        return Score::NotApplicable;
    }
    let scaled = stats.complex_word_count as f64 * (30.0 / stats.sentence_count as f64);
    Score::finite(1.0430 * scaled.sqrt() + 3.1291)
}
