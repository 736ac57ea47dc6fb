//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use textmetry_core::AnalysisResult;

/// JSON formatter - outputs all reports as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<DocumentReport>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Where the document came from
    pub source: String,
    /// Full analysis result
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, result: &AnalysisResult) -> Result<()> {
        self.reports.push(DocumentReport {
            source: source.to_string(),
            result: result.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textmetry_core::analyze;

    #[test]
    fn test_json_array_of_reports() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter
            .format_report("a.txt", &analyze("The quick brown fox jumps over the lazy dog."))
            .unwrap();
        formatter.format_report("b.txt", &analyze("")).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let reports = value.as_array().unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["source"], "a.txt");
        assert_eq!(reports[0]["statistics"]["word_count"], 9);
        assert_eq!(reports[0]["readability"]["smog"]["status"], "not_applicable");
        assert_eq!(reports[0]["times"]["reading_seconds"], 3);
        assert_eq!(
            reports[1]["readability"]["flesch_kincaid_grade"]["status"],
            "not_computable"
        );
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.format_report("a", &analyze("Hi there.")).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(out.trim_end().lines().count(), 1);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.into_inner()).unwrap(), "[]\n");
    }
}
