//! Reading and speaking time estimates

use serde::{Deserialize, Serialize};

/// Default silent reading rate in words per minute
pub const READING_WPM: u32 = 200;

/// Default speaking rate in words per minute
pub const SPEAKING_WPM: u32 = 130;

/// Estimated durations, in whole seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEstimate {
    /// Silent reading time
    pub reading_seconds: u64,
    /// Reading-aloud time
    pub speaking_seconds: u64,
}

impl TimeEstimate {
    /// Reading time as (minutes, seconds)
    pub fn reading_minutes(&self) -> (u64, u64) {
        (self.reading_seconds / 60, self.reading_seconds % 60)
    }

    /// Speaking time as (minutes, seconds)
    pub fn speaking_minutes(&self) -> (u64, u64) {
        (self.speaking_seconds / 60, self.speaking_seconds % 60)
    }
}

/// Estimate times at the default rates
pub fn estimate_times(word_count: usize) -> TimeEstimate {
    estimate_times_with(word_count, READING_WPM, SPEAKING_WPM)
}

/// Estimate times at custom rates
///
/// A zero rate yields zero seconds rather than a division fault; analyzer
/// configuration rejects zero rates before they get here.
pub fn estimate_times_with(word_count: usize, reading_wpm: u32, speaking_wpm: u32) -> TimeEstimate {
    TimeEstimate {
        reading_seconds: seconds_at(word_count, reading_wpm),
        speaking_seconds: seconds_at(word_count, speaking_wpm),
    }
}

/// Round `words / wpm` minutes to the nearest second, halves away from zero
fn seconds_at(word_count: usize, wpm: u32) -> u64 {
    if word_count == 0 || wpm == 0 {
        return 0;
    }
    (word_count as f64 * 60.0 / f64::from(wpm)).round() as u64
}
