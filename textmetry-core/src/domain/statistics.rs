//! Count, extremal and frequency statistics over token sequences

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::syllable::{estimate_syllables, is_complex};
use super::tokenizer::{Token, Tokens};

/// One entry of the case-insensitive frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    /// Lower-cased word text
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

/// Aggregate statistics for one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of word tokens
    pub word_count: usize,
    /// Number of sentence tokens
    pub sentence_count: usize,
    /// Number of paragraph tokens
    pub paragraph_count: usize,
    /// Characters in the whole document
    pub character_count: usize,
    /// Characters in the document excluding whitespace
    pub non_whitespace_count: usize,
    /// Alphabetic characters inside word tokens
    pub letter_count: usize,
    /// Mean word length in characters, 0.0 without words
    pub average_word_length: f64,
    /// Longest word, first occurrence on ties
    pub longest_word: Option<String>,
    /// Most frequent lower-cased word, earliest first occurrence on ties
    pub most_frequent_word: Option<WordFrequency>,
    /// Frequency table in order of first occurrence
    pub frequencies: Vec<WordFrequency>,
    /// Sum of syllable estimates over all words
    pub syllable_count: usize,
    /// Words with three or more estimated syllables
    pub complex_word_count: usize,
}

impl Statistics {
    /// The `n` most frequent words, highest count first
    ///
    /// Equal counts keep first-occurrence order.
    pub fn top_words(&self, n: usize) -> Vec<&WordFrequency> {
        let mut ranked: Vec<&WordFrequency> = self.frequencies.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }

    /// Number of distinct lower-cased words
    pub fn unique_word_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Mean words per sentence, `None` without sentences
    pub fn words_per_sentence(&self) -> Option<f64> {
        ratio(self.word_count, self.sentence_count)
    }

    /// Mean syllables per word, `None` without words
    pub fn syllables_per_word(&self) -> Option<f64> {
        ratio(self.syllable_count, self.word_count)
    }
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

/// Reduce the token sequences of `text` into [`Statistics`]
pub fn aggregate(tokens: &Tokens<'_>, text: &str) -> Statistics {
    let mut word_chars = 0;
    let mut letter_count = 0;
    let mut syllable_count = 0;
    let mut complex_word_count = 0;
    let mut longest: Option<(usize, &Token<'_>)> = None;

    for word in &tokens.words {
        let len = word.char_len();
        word_chars += len;
        letter_count += word.text.chars().filter(|c| c.is_alphabetic()).count();

        let syllables = estimate_syllables(word.text);
        syllable_count += syllables;
        if is_complex(syllables) {
            complex_word_count += 1;
        }

        // Strictly greater keeps the first occurrence on ties
        if longest.map_or(true, |(best, _)| len > best) {
            longest = Some((len, word));
        }
    }

    let word_count = tokens.words.len();
    let average_word_length = if word_count > 0 {
        word_chars as f64 / word_count as f64
    } else {
        0.0
    };

    let frequencies = frequency_table(&tokens.words);
    let most_frequent_word = most_frequent(&frequencies).cloned();

    Statistics {
        word_count,
        sentence_count: tokens.sentences.len(),
        paragraph_count: tokens.paragraphs.len(),
        character_count: text.chars().count(),
        non_whitespace_count: text.chars().filter(|c| !c.is_whitespace()).count(),
        letter_count,
        average_word_length,
        longest_word: longest.map(|(_, word)| word.text.to_string()),
        most_frequent_word,
        frequencies,
        syllable_count,
        complex_word_count,
    }
}

/// Build the case-insensitive frequency table in first-occurrence order
pub fn frequency_table(words: &[Token<'_>]) -> Vec<WordFrequency> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut table: Vec<WordFrequency> = Vec::new();

    for word in words {
        let key = word.text.to_lowercase();
        match index.get(&key) {
            Some(&slot) => table[slot].count += 1,
            None => {
                index.insert(key.clone(), table.len());
                table.push(WordFrequency {
                    word: key,
                    count: 1,
                });
            }
        }
    }

    table
}

/// Highest count wins; the table order breaks ties
fn most_frequent(table: &[WordFrequency]) -> Option<&WordFrequency> {
    table.iter().fold(None, |best: Option<&WordFrequency>, entry| match best {
        Some(b) if b.count >= entry.count => Some(b),
        _ => Some(entry),
    })
}
