//! Clean command implementation

use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use seiri_core::{CleanConfig, ReflowMode, TextCleaner};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;

/// Arguments for the clean command
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Input files or glob patterns; use "-" for stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Language profile for punctuation and filler rules
    #[arg(short, long, default_value = "zh")]
    pub language: String,

    /// Paragraph regrouping mode
    #[arg(short, long, value_enum, default_value = "count")]
    pub mode: Mode,

    /// Sentences per paragraph (count mode)
    #[arg(short = 'u', long, default_value_t = 5)]
    pub units: usize,

    /// Target paragraph length in characters (length mode)
    #[arg(short = 'w', long, default_value_t = 100)]
    pub width: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Cleaned text, documents separated by a blank line
    Text,
    /// JSON array of cleaned documents
    Json,
}

/// Paragraph regrouping strategies
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Mode {
    /// Fixed number of sentences per paragraph
    Count,
    /// Greedy wrap toward a target character length
    Length,
}

impl CleanArgs {
    /// Execute the clean command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let config = self.to_config()?;
        let cleaner = TextCleaner::new(config).context("failed to build pipeline")?;

        let documents = self.read_documents()?;
        log::info!("cleaning {} document(s)", documents.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(documents.len() as u64);

        let cleaned: Vec<(String, String)> = documents
            .par_iter()
            .map(|(source, text)| {
                let out = cleaner.clean(text);
                progress.document_completed(source);
                (source.clone(), out)
            })
            .collect();
        progress.finish();

        let writer = self.open_output()?;
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for (source, text) in &cleaned {
            formatter.format_document(source, text)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }

    fn to_config(&self) -> Result<CleanConfig> {
        let mode = match self.mode {
            Mode::Count => ReflowMode::Count {
                units_per_paragraph: self.units,
            },
            Mode::Length => ReflowMode::Length {
                target_chars: self.width,
            },
        };

        CleanConfig::builder()
            .language(&self.language)
            .mode(mode)
            .build()
            .map_err(Into::into)
    }

    /// Read all inputs as (source, text) pairs
    fn read_documents(&self) -> Result<Vec<(String, String)>> {
        if self.input.len() == 1 && self.input[0] == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            return Ok(vec![("<stdin>".to_string(), text)]);
        }

        let files = resolve_patterns(&self.input)?;
        files
            .iter()
            .map(|path| {
                let text = FileReader::read_text(path)?;
                Ok((path.display().to_string(), text))
            })
            .collect()
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("failed to create output file: {}", path.display())
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(std::io::stdout().lock())),
        }
    }
}
