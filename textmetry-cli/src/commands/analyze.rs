//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;
use textmetry_core::{AnalysisResult, TextAnalyzer};

use crate::config::{AnalysisOverrides, CliConfig};
use crate::error::CliError;
use crate::input::{resolve_patterns, InputSource};
use crate::output::{create_formatter, FormatOptions, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, otherwise text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "TEXTMETRY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Silent reading rate in words per minute
    #[arg(long, value_name = "WPM")]
    pub reading_wpm: Option<u32>,

    /// Reading-aloud rate in words per minute
    #[arg(long, value_name = "WPM")]
    pub speaking_wpm: Option<u32>,

    /// Number of most frequent words to report
    #[arg(long = "top", value_name = "N")]
    pub top_words: Option<usize>,

    /// Write JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Analyse documents in parallel even when there is only one
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: all CPUs)
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text analysis");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let analyzer = self.build_analyzer(&config)?;
        let format = self.resolve_format(&config)?;
        let options = FormatOptions {
            decimals: config.output.decimals,
            pretty_json: config.output.pretty_json && !self.compact,
        };

        let sources = resolve_patterns(&self.input)?;
        log::info!("Analyzing {} document(s)", sources.len());

        let start = Instant::now();
        let results = self.analyze_sources(&analyzer, &sources)?;
        log::info!(
            "Analyzed {} document(s) in {:.2?}",
            results.len(),
            start.elapsed()
        );

        let mut formatter = self.create_output(format, options)?;
        for (source, result) in sources.iter().zip(&results) {
            formatter.format_report(&source.to_string(), result)?;
        }
        formatter.finish()?;

        if let Some(path) = &self.output {
            log::info!("Report written to {}", path.display());
        }

        Ok(())
    }

    /// Combine file configuration and flags into an analyzer
    fn build_analyzer(&self, config: &CliConfig) -> Result<TextAnalyzer> {
        let overrides = AnalysisOverrides {
            reading_wpm: self.reading_wpm,
            speaking_wpm: self.speaking_wpm,
            top_words: self.top_words,
        };
        let analyzer_config = config.analyzer_config(overrides)?;
        log::debug!("Analyzer configuration: {:?}", analyzer_config);

        Ok(TextAnalyzer::with_config(analyzer_config).map_err(CliError::from)?)
    }

    /// Pick the output format from flags, then the config file
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &config.output.default_format;
        OutputFormat::from_name(name).ok_or_else(|| {
            CliError::ConfigError(format!("Unknown output format '{name}'")).into()
        })
    }

    /// Read and analyse every source, preserving input order
    fn analyze_sources(
        &self,
        analyzer: &TextAnalyzer,
        sources: &[InputSource],
    ) -> Result<Vec<AnalysisResult>> {
        let stdin_only = sources.iter().all(InputSource::is_stdin);
        let mut progress = ProgressReporter::new(self.quiet || stdin_only);
        progress.init_documents(sources.len() as u64);

        let analyze_one = |source: &InputSource| -> Result<AnalysisResult> {
            let text = source.read()?;
            log::debug!("{}: {} bytes", source, text.len());
            let result = analyzer.analyze(&text);
            progress.document_completed(&source.to_string());
            Ok(result)
        };

        let results = if self.use_parallel(sources.len()) {
            let threads = self.thread_count()?;
            log::debug!("Using {} worker thread(s)", threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| sources.par_iter().map(analyze_one).collect::<Result<Vec<_>>>())
        } else {
            sources.iter().map(analyze_one).collect::<Result<Vec<_>>>()
        };

        progress.finish();
        results
    }

    fn use_parallel(&self, document_count: usize) -> bool {
        self.parallel || document_count > 1
    }

    fn thread_count(&self) -> Result<usize> {
        match self.threads {
            Some(0) => Err(CliError::ConfigError(
                "Thread count must be greater than 0".to_string(),
            )
            .into()),
            Some(n) => Ok(n),
            None => Ok(num_cpus::get()),
        }
    }

    /// Open the output destination and wrap it in a formatter
    fn create_output(
        &self,
        format: OutputFormat,
        options: FormatOptions,
    ) -> Result<Box<dyn OutputFormatter>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(create_formatter(format, BufWriter::new(file), options))
            }
            None => Ok(create_formatter(format, io::stdout(), options)),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // Repeated initialisation (e.g. in tests) keeps the first logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> AnalyzeArgs {
        AnalyzeArgs {
            input,
            output: None,
            format: None,
            config: None,
            reading_wpm: None,
            speaking_wpm: None,
            top_words: None,
            compact: false,
            parallel: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_execute_writes_json_report() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("doc.txt");
        let output = dir.path().join("report.json");
        fs::write(&input, "The quick brown fox jumps over the lazy dog.").unwrap();

        let mut args = args(vec![input.display().to_string()]);
        args.output = Some(output.clone());
        args.format = Some(OutputFormat::Json);
        args.execute().unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(report[0]["statistics"]["word_count"], 9);
    }

    #[test]
    fn test_parallel_results_keep_input_order() {
        let dir = TempDir::new().unwrap();
        for (name, text) in [("a.txt", "One."), ("b.txt", "One. Two."), ("c.txt", "One. Two. Three.")] {
            fs::write(dir.path().join(name), text).unwrap();
        }

        let mut args = args(vec![dir.path().join("*.txt").display().to_string()]);
        args.threads = Some(2);
        let config = CliConfig::default();
        let analyzer = args.build_analyzer(&config).unwrap();
        let sources = resolve_patterns(&args.input).unwrap();
        let results = args.analyze_sources(&analyzer, &sources).unwrap();

        let counts: Vec<usize> = results
            .iter()
            .map(|r| r.statistics.sentence_count)
            .collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut args = args(vec!["x".to_string()]);
        args.threads = Some(0);
        let err = args.thread_count().unwrap_err();
        assert!(err.to_string().contains("Thread count must be greater than 0"));
    }

    #[test]
    fn test_format_resolution() {
        let mut args = args(vec!["x".to_string()]);
        let mut config = CliConfig::default();
        assert_eq!(args.resolve_format(&config).unwrap(), OutputFormat::Text);

        config.output.default_format = "markdown".to_string();
        assert_eq!(args.resolve_format(&config).unwrap(), OutputFormat::Markdown);

        args.format = Some(OutputFormat::Json);
        assert_eq!(args.resolve_format(&config).unwrap(), OutputFormat::Json);

        args.format = None;
        config.output.default_format = "yaml".to_string();
        assert!(args
            .resolve_format(&config)
            .unwrap_err()
            .to_string()
            .contains("Unknown output format 'yaml'"));
    }

    #[test]
    fn test_flags_override_rates() {
        let mut args = args(vec!["x".to_string()]);
        args.reading_wpm = Some(100);
        let analyzer = args.build_analyzer(&CliConfig::default()).unwrap();
        assert_eq!(analyzer.config().reading_wpm(), 100);
        assert_eq!(analyzer.config().speaking_wpm(), 130);
    }
}
