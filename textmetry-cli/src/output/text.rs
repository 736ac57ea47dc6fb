//! Plain text output formatter

use super::{format_duration, format_score, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use textmetry_core::AnalysisResult;

/// Plain text formatter - one labelled report block per document
pub struct TextFormatter<W: Write> {
    writer: W,
    decimals: usize,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, decimals: usize) -> Self {
        Self {
            writer,
            decimals,
            documents: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, result: &AnalysisResult) -> Result<()> {
        let stats = &result.statistics;
        let d = self.decimals;
        let w = &mut self.writer;

        if self.documents > 0 {
            writeln!(w)?;
        }
        self.documents += 1;

        writeln!(w, "== {source} ==")?;
        writeln!(w, "Words:                  {}", stats.word_count)?;
        writeln!(w, "Sentences:              {}", stats.sentence_count)?;
        writeln!(w, "Paragraphs:             {}", stats.paragraph_count)?;
        writeln!(w, "Characters:             {}", stats.character_count)?;
        writeln!(w, "Characters (no spaces): {}", stats.non_whitespace_count)?;
        writeln!(w, "Average word length:    {:.d$}", stats.average_word_length)?;
        writeln!(
            w,
            "Longest word:           {}",
            stats.longest_word.as_deref().unwrap_or("-")
        )?;
        match &stats.most_frequent_word {
            Some(top) => writeln!(w, "Most frequent word:     {} ({})", top.word, top.count)?,
            None => writeln!(w, "Most frequent word:     -")?,
        }
        writeln!(w, "Syllables:              {}", stats.syllable_count)?;
        writeln!(w, "Complex words:          {}", stats.complex_word_count)?;

        writeln!(w)?;
        writeln!(w, "Readability")?;
        for (name, score) in result.readability.named() {
            writeln!(w, "  {:<22}{}", format!("{name}:"), format_score(score, d))?;
        }

        writeln!(w)?;
        writeln!(
            w,
            "Reading time:           {}",
            format_duration(result.times.reading_seconds)
        )?;
        writeln!(
            w,
            "Speaking time:          {}",
            format_duration(result.times.speaking_seconds)
        )?;

        if !result.top_words.is_empty() {
            writeln!(w)?;
            writeln!(w, "Top words")?;
            for entry in &result.top_words {
                writeln!(w, "  {:<20}{}", entry.word, entry.count)?;
            }
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textmetry_core::analyze;

    fn render(text: &str) -> String {
        let mut formatter = TextFormatter::new(Vec::new(), 1);
        formatter.format_report("sample.txt", &analyze(text)).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_report_contents() {
        let out = render("The quick brown fox jumps over the lazy dog.");
        assert!(out.starts_with("== sample.txt =="));
        assert!(out.contains("Words:                  9"));
        assert!(out.contains("Sentences:              1"));
        assert!(out.contains("Longest word:           quick"));
        assert!(out.contains("Most frequent word:     the (2)"));
        assert!(out.contains("SMOG:"));
        assert!(out.contains("n/a (needs 30+ sentences)"));
        assert!(out.contains("Reading time:           3s"));
        assert!(out.contains("Top words"));
    }

    #[test]
    fn test_empty_document_report() {
        let out = render("");
        assert!(out.contains("Words:                  0"));
        assert!(out.contains("Longest word:           -"));
        assert!(out.contains("Most frequent word:     -"));
        assert!(!out.contains("Top words"));
    }

    #[test]
    fn test_documents_are_separated() {
        let mut formatter = TextFormatter::new(Vec::new(), 1);
        formatter.format_report("a", &analyze("One.")).unwrap();
        formatter.format_report("b", &analyze("Two.")).unwrap();
        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(out.contains("\n\n== b =="));
    }
}
