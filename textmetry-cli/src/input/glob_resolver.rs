//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;

use super::{InputSource, STDIN_MARKER};
use crate::error::CliError;

/// Resolve command-line inputs to analysable sources
///
/// `-` selects standard input; anything else is a glob pattern that must
/// match at least one regular file across all patterns.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut stdin = false;
    let mut files = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_MARKER {
            stdin = true;
            continue;
        }

        let paths = glob(pattern).map_err(|e| {
            CliError::InvalidPattern(format!("{pattern} ({e})"))
        })?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() && !stdin {
        anyhow::bail!(CliError::FileNotFound(format!(
            "no files match {}",
            patterns.join(", ")
        )));
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    let mut sources: Vec<InputSource> = files.into_iter().map(InputSource::File).collect();
    if stdin {
        sources.insert(0, InputSource::Stdin);
    }

    Ok(sources)
}
