//! Property-based tests for tokenization, syllables and scoring

use proptest::prelude::*;
use textmetry_core::domain::tokenizer::is_word_char;
use textmetry_core::{analyze, estimate_syllables, estimate_times, tokenize, Score};

fn prose() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .!?'\"()\\-\n\r\t,;]{0,300}"
}

fn score_is_well_formed(score: Score) -> bool {
    match score {
        Score::Value(v) => v.is_finite(),
        Score::NotComputable | Score::NotApplicable => true,
    }
}

proptest! {
    #[test]
    fn words_empty_iff_no_word_characters(text in "\\PC{0,200}") {
        let tokens = tokenize(&text);
        prop_assert_eq!(tokens.words.is_empty(), !text.chars().any(is_word_char));
    }

    #[test]
    fn syllables_are_at_least_one(word in "[a-zA-Z'\\-]{1,30}") {
        prop_assert!(estimate_syllables(&word) >= 1);
    }

    #[test]
    fn analysis_is_idempotent(text in prose()) {
        prop_assert_eq!(analyze(&text), analyze(&text));
    }

    #[test]
    fn appending_a_sentence_never_decreases_count(text in prose()) {
        let before = tokenize(&text).sentences.len();
        let extended = format!("{text} Another complete sentence.");
        let after = tokenize(&extended).sentences.len();
        prop_assert!(after >= before);
    }

    #[test]
    fn non_blank_documents_have_a_sentence(text in prose()) {
        let sentences = tokenize(&text).sentences.len();
        if text.trim().is_empty() {
            prop_assert_eq!(sentences, 0);
        } else {
            prop_assert!(sentences >= 1);
        }
    }

    #[test]
    fn scores_are_finite_or_marked(text in "\\PC{0,300}") {
        let result = analyze(&text);
        for (_, score) in result.readability.named() {
            prop_assert!(score_is_well_formed(score));
        }
    }

    #[test]
    fn paragraph_count_ignores_line_ending_style(
        paragraphs in prop::collection::vec("[a-z]{1,8}( [a-z]{1,8}){0,5}\\.", 1..6)
    ) {
        let lf = paragraphs.join("\n\n");
        let crlf = paragraphs.join("\r\n\r\n");
        prop_assert_eq!(tokenize(&lf).paragraphs.len(), paragraphs.len());
        prop_assert_eq!(tokenize(&crlf).paragraphs.len(), paragraphs.len());
    }

    #[test]
    fn reading_time_grows_with_word_count(words in 0usize..100_000) {
        let shorter = estimate_times(words);
        let longer = estimate_times(words + 1);
        prop_assert!(longer.reading_seconds >= shorter.reading_seconds);
        prop_assert!(longer.speaking_seconds >= shorter.speaking_seconds);
    }
}

#[test]
fn two_hundred_words_read_in_one_minute() {
    assert_eq!(estimate_times(200).reading_seconds, 60);
}
