//! Command line argument parsing for the keylookup CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::TokenizerKind;
use crate::config::{AnalyzerConfig, NGramConfig};
use crate::error::Result;

/// keylookup - n-gram text analysis for key lookup indexing
#[derive(Parser, Debug, Clone)]
#[command(name = "keylookup")]
#[command(about = "N-gram text analysis for key lookup indexing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KeyLookupArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KeyLookupArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a single text
    Analyze(AnalyzeArgs),

    /// Analyze every line of a file as a separate document
    #[command(name = "analyze-file")]
    AnalyzeFile(AnalyzeFileArgs),

    /// Print the effective analyzer configuration
    Config(ConfigArgs),
}

/// Arguments for analyzing a text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub options: AnalysisOptions,
}

/// Arguments for analyzing a file
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeFileArgs {
    /// Input file, one document per line (malformed UTF-8 is tolerated)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Analyze lines in parallel
    #[arg(long)]
    pub parallel: bool,

    #[command(flatten)]
    pub options: AnalysisOptions,
}

/// Arguments for printing the configuration
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub options: AnalysisOptions,
}

/// Analyzer options shared by all commands.
///
/// Values given on the command line override those of the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "KEYLOOKUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum n-gram length
    #[arg(long)]
    pub min_gram: Option<usize>,

    /// Maximum n-gram length
    #[arg(long)]
    pub max_gram: Option<usize>,

    /// Drop words shorter than the minimum n-gram length
    #[arg(long)]
    pub no_preserve_original: bool,

    /// Also emit words longer than the maximum n-gram length whole
    #[arg(long)]
    pub preserve_long: bool,

    /// Word segmentation strategy
    #[arg(short, long)]
    pub tokenizer: Option<TokenizerKind>,

    /// Only normalize words, do not expand them into n-grams
    #[arg(long)]
    pub words_only: bool,
}

impl AnalysisOptions {
    /// Resolve the effective analyzer configuration.
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let base = match &self.config {
            Some(path) => AnalyzerConfig::from_file(path)?,
            None => AnalyzerConfig::default(),
        };

        let ngram = NGramConfig::new(
            self.min_gram.unwrap_or(base.ngram.min_gram()),
            self.max_gram.unwrap_or(base.ngram.max_gram()),
            base.ngram.preserve_original() && !self.no_preserve_original,
        )?
        .with_preserve_long(base.ngram.preserve_long() || self.preserve_long);

        Ok(AnalyzerConfig {
            tokenizer: self.tokenizer.unwrap_or(base.tokenizer),
            ngram,
        })
    }
}

/// Output formats supported by the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
