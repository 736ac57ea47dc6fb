//! Markdown output formatter

use super::{format_duration, format_score, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use textmetry_core::AnalysisResult;

/// Markdown formatter - outputs each report as tables under a heading
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    decimals: usize,
    document_count: usize,
    total_words: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, decimals: usize) -> Self {
        Self {
            writer,
            decimals,
            document_count: 0,
            total_words: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, result: &AnalysisResult) -> Result<()> {
        self.document_count += 1;
        self.total_words += result.statistics.word_count;

        let stats = &result.statistics;
        let d = self.decimals;
        let w = &mut self.writer;

        writeln!(w, "## {source}")?;
        writeln!(w)?;
        writeln!(w, "| Statistic | Value |")?;
        writeln!(w, "|---|---|")?;
        writeln!(w, "| Words | {} |", stats.word_count)?;
        writeln!(w, "| Sentences | {} |", stats.sentence_count)?;
        writeln!(w, "| Paragraphs | {} |", stats.paragraph_count)?;
        writeln!(w, "| Characters | {} |", stats.character_count)?;
        writeln!(w, "| Average word length | {:.d$} |", stats.average_word_length)?;
        writeln!(
            w,
            "| Longest word | {} |",
            stats.longest_word.as_deref().unwrap_or("-")
        )?;
        writeln!(
            w,
            "| Most frequent word | {} |",
            stats
                .most_frequent_word
                .as_ref()
                .map(|f| format!("{} ({})", f.word, f.count))
                .unwrap_or_else(|| "-".to_string())
        )?;
        writeln!(w, "| Syllables | {} |", stats.syllable_count)?;
        writeln!(w, "| Complex words | {} |", stats.complex_word_count)?;
        writeln!(
            w,
            "| Reading time | {} |",
            format_duration(result.times.reading_seconds)
        )?;
        writeln!(
            w,
            "| Speaking time | {} |",
            format_duration(result.times.speaking_seconds)
        )?;
        writeln!(w)?;

        writeln!(w, "| Readability | Score |")?;
        writeln!(w, "|---|---|")?;
        for (name, score) in result.readability.named() {
            writeln!(w, "| {name} | {} |", format_score(score, d))?;
        }
        writeln!(w)?;

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Documents: {}, total words: {}*",
            self.document_count, self.total_words
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textmetry_core::analyze;

    #[test]
    fn test_markdown_tables() {
        let mut formatter = MarkdownFormatter::new(Vec::new(), 2);
        formatter
            .format_report("doc.md", &analyze("Simple words here. More words there."))
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(out.starts_with("## doc.md"));
        assert!(out.contains("| Words | 6 |"));
        assert!(out.contains("| Sentences | 2 |"));
        assert!(out.contains("| Gunning Fog | "));
        assert!(out.contains("*Documents: 1, total words: 6*"));
    }

    #[test]
    fn test_totals_across_documents() {
        let mut formatter = MarkdownFormatter::new(Vec::new(), 1);
        formatter.format_report("a", &analyze("One two.")).unwrap();
        formatter.format_report("b", &analyze("Three four five.")).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(out.contains("*Documents: 2, total words: 5*"));
    }
}
