//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with best-effort UTF-8 decoding
///
/// Invalid byte sequences are replaced with U+FFFD so a badly encoded file
/// still produces statistics.
pub struct FileReader;

impl FileReader {
    /// Read a file as text
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self::decode(bytes, &path.display().to_string()))
    }

    /// Read all of standard input as text
    pub fn read_stdin() -> Result<String> {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .context("Failed to read from stdin")?;

        Ok(Self::decode(bytes, "<stdin>"))
    }

    fn decode(bytes: Vec<u8>, source: &str) -> String {
        match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{source} is not valid UTF-8, replacing invalid sequences");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        }
    }
}
