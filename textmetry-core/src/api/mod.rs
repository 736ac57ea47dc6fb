//! Public analysis API for textmetry-core
//!
//! This module wraps the pure domain functions behind a configurable
//! analyzer, an input abstraction and a single result type shared by the
//! CLI and library callers.

mod analyzer;
mod config;
mod error;
mod input;
mod output;


pub use analyzer::TextAnalyzer;
pub use config::{defaults, AnalyzerConfig, AnalyzerConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::AnalysisResult;
