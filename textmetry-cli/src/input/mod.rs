//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

use std::fmt;
use std::path::PathBuf;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// Name used on the command line for standard input
pub const STDIN_MARKER: &str = "-";

/// A document to analyse
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Read the document text
    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }

    /// Whether this source is standard input
    pub fn is_stdin(&self) -> bool {
        matches!(self, InputSource::Stdin)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
