//! Pure text analysis: tokenization, syllables, statistics, scores and timing
//!
//! Everything here is a free function of its input. Nothing allocates
//! shared state or performs I/O.

pub mod readability;
pub mod statistics;
pub mod syllable;
pub mod timing;
pub mod tokenizer;

pub use readability::{score, ReadabilityScores, Score, SMOG_MIN_SENTENCES};
pub use statistics::{aggregate, Statistics, WordFrequency};
pub use syllable::{estimate_syllables, COMPLEX_WORD_SYLLABLES};
pub use timing::{estimate_times, estimate_times_with, TimeEstimate, READING_WPM, SPEAKING_WPM};
pub use tokenizer::{tokenize, Token, Tokens};
