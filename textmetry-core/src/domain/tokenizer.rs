//! Lexical segmentation into words, sentences and paragraphs
//!
//! All three scans borrow from the input text and never fail. Sentence
//! segmentation is intentionally naive: every `.`, `!` or `?` ends a
//! sentence, abbreviations included.

use regex::Regex;
use std::sync::OnceLock;

/// Characters that terminate a sentence
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Closing characters that stay attached to the sentence they follow
const CLOSING_CHARS: [char; 10] = ['"', '\'', ')', ']', '}', '”', '’', '»', '›', '」'];

/// Matches a line break followed by one or more blank lines
static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();

fn paragraph_break() -> &'static Regex {
    PARAGRAPH_BREAK.get_or_init(|| {
        Regex::new(r"(?:\r\n|\r|\n)(?:[ \t]*(?:\r\n|\r|\n))+")
            .expect("paragraph break pattern is valid")
    })
}

/// A slice of the source document with its byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text, borrowed from the document
    pub text: &'a str,
    /// Byte offset of the token start in the document
    pub offset: usize,
}

impl<'a> Token<'a> {
    fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }

    /// Length of the token in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// The three token sequences of one document, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens<'a> {
    /// Word tokens
    pub words: Vec<Token<'a>>,
    /// Sentence tokens, trimmed
    pub sentences: Vec<Token<'a>>,
    /// Paragraph tokens, trimmed
    pub paragraphs: Vec<Token<'a>>,
}

/// Segment a document into words, sentences and paragraphs
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        words: words(text),
        sentences: sentences(text),
        paragraphs: paragraphs(text),
    }
}

/// Check whether a character may appear inside a word token
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '\'' | '’' | '-')
}

/// Extract maximal runs of letters, digits, apostrophes and hyphens
pub fn words(text: &str) -> Vec<Token<'_>> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        match (is_word_char(ch), start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                words.push(Token::new(&text[s..idx], s));
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        words.push(Token::new(&text[s..], s));
    }

    words
}

/// Extract sentences ending at `.`, `!` or `?`
///
/// A run of terminators ends a single sentence, and closing quotes or
/// brackets directly after it belong to that sentence. Text after the last
/// terminator becomes a final sentence when it is not blank.
pub fn sentences(text: &str) -> Vec<Token<'_>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        if !SENTENCE_TERMINATORS.contains(&ch) {
            continue;
        }

        // Swallow repeated terminators ("?!", "...") and closing marks
        let mut end = text.len();
        while let Some(&(idx, next)) = chars.peek() {
            let absorb = SENTENCE_TERMINATORS.contains(&next)
                || (CLOSING_CHARS.contains(&next) && !opens_next(text, idx, next));
            if absorb {
                chars.next();
            } else {
                end = idx;
                break;
            }
        }

        push_trimmed(&mut sentences, text, start, end);
        start = end;
    }

    if start < text.len() {
        push_trimmed(&mut sentences, text, start, text.len());
    }

    sentences
}

/// A straight quote directly followed by a word character opens the next sentence
fn opens_next(text: &str, idx: usize, quote: char) -> bool {
    matches!(quote, '"' | '\'')
        && text[idx + quote.len_utf8()..]
            .chars()
            .next()
            .is_some_and(is_word_char)
}

/// Extract paragraphs separated by one or more blank lines
pub fn paragraphs(text: &str) -> Vec<Token<'_>> {
    let mut paragraphs = Vec::new();
    let mut start = 0;

    for brk in paragraph_break().find_iter(text) {
        push_trimmed(&mut paragraphs, text, start, brk.start());
        start = brk.end();
    }
    push_trimmed(&mut paragraphs, text, start, text.len());

    paragraphs
}

/// Push `text[start..end]` trimmed, skipping blank segments
fn push_trimmed<'a>(out: &mut Vec<Token<'a>>, text: &'a str, start: usize, end: usize) {
    let segment = &text[start..end];
    let trimmed_start = segment.trim_start();
    let trimmed = trimmed_start.trim_end();
    if trimmed.is_empty() {
        return;
    }
    let offset = start + (segment.len() - trimmed_start.len());
    out.push(Token::new(trimmed, offset));
}
