//! Vowel-group syllable estimation
//!
//! This is a heuristic, not a dictionary lookup. Readability scores are
//! defined relative to exactly this rule, so it must not be "improved".

/// Vowels used to form syllable groups
const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Minimum syllables reported for any word
pub const MIN_SYLLABLES: usize = 1;

/// Words at or above this syllable count are complex
pub const COMPLEX_WORD_SYLLABLES: usize = 3;

/// Estimate the number of syllables in a single word
///
/// 1. Lower-case and drop non-letters.
/// 2. Count maximal runs of `a e i o u y`.
/// 3. Subtract one for a single trailing `e` when more than one group was found.
/// 4. Clamp to at least one.
pub fn estimate_syllables(word: &str) -> usize {
    let cleaned: Vec<char> = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect();

    let mut groups = 0;
    let mut in_group = false;
    for &ch in &cleaned {
        let vowel = VOWELS.contains(&ch);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }

    if groups > 1 && has_silent_e(&cleaned) {
        groups -= 1;
    }

    groups.max(MIN_SYLLABLES)
}

/// Check whether a syllable estimate makes a word complex
pub fn is_complex(syllables: usize) -> bool {
    syllables >= COMPLEX_WORD_SYLLABLES
}

/// A single trailing `e`: "make" qualifies, "agree" does not
fn has_silent_e(cleaned: &[char]) -> bool {
    match cleaned {
        [.., prev, 'e'] => *prev != 'e',
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_vowel_group_words() {
        assert_eq!(estimate_syllables("jumps"), 1);
        assert_eq!(estimate_syllables("fox"), 1);
        assert_eq!(estimate_syllables("dog"), 1);
        assert_eq!(estimate_syllables("quick"), 1); // "ui" is one run
    }

    #[test]
    fn test_multiple_groups() {
        assert_eq!(estimate_syllables("banana"), 3);
        assert_eq!(estimate_syllables("lazy"), 2);
        assert_eq!(estimate_syllables("beautiful"), 3);
        assert_eq!(estimate_syllables("readability"), 5);
    }

    #[test]
    fn test_silent_e() {
        assert_eq!(estimate_syllables("make"), 1);
        assert_eq!(estimate_syllables("complete"), 2);
        assert_eq!(estimate_syllables("the"), 1); // one group, no decrement
        assert_eq!(estimate_syllables("table"), 1); // heuristic, not phonetics
    }

    #[test]
    fn test_double_trailing_e_is_not_silent() {
        assert_eq!(estimate_syllables("agree"), 2);
        assert_eq!(estimate_syllables("free"), 1);
    }

    #[test]
    fn test_case_and_punctuation_are_ignored() {
        assert_eq!(estimate_syllables("HELLO"), estimate_syllables("hello"));
        assert_eq!(estimate_syllables("don't"), 1);
        assert_eq!(estimate_syllables("re-enter"), 2); // "ee" is one run
    }

    #[test]
    fn test_clamp_to_minimum() {
        assert_eq!(estimate_syllables("rhythm"), 1);
        assert_eq!(estimate_syllables("nth"), 1);
        assert_eq!(estimate_syllables("42"), 1);
        assert_eq!(estimate_syllables("'"), 1);
        assert_eq!(estimate_syllables("-"), 1);
    }

    #[test]
    fn test_complex_threshold() {
        assert!(!is_complex(2));
        assert!(is_complex(3));
        assert!(is_complex(estimate_syllables("organization")));
    }
}
