//! Command implementations for the keylookup CLI.

use std::fs;
use std::time::Instant;

use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, NGramAnalyzer, Normalizer};
use crate::analysis::token::Token;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: KeyLookupArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args, &args),
        Command::AnalyzeFile(file_args) => analyze_file(file_args, &args),
        Command::Config(config_args) => show_config(config_args, &args),
    }
}

/// Build the analyzer selected by the shared analysis options.
pub fn build_analyzer(options: &AnalysisOptions) -> Result<Box<dyn Analyzer>> {
    let config = options.analyzer_config()?;

    if options.words_only {
        Ok(Box::new(Normalizer::with_tokenizer(config.tokenizer)))
    } else {
        Ok(Box::new(NGramAnalyzer::new(config)))
    }
}

/// Analyze a single text.
fn analyze_text(args: &AnalyzeArgs, cli_args: &KeyLookupArgs) -> Result<()> {
    let analyzer = build_analyzer(&args.options)?;
    let tokens: Vec<Token> = analyzer.analyze(&args.text)?.collect();

    log::info!("{} tokens from {} bytes", tokens.len(), args.text.len());

    output_result(
        "Analyzed text",
        &AnalysisResult {
            analyzer: analyzer.name().to_string(),
            text: args.text.clone(),
            token_count: tokens.len(),
            tokens,
        },
        cli_args,
    )
}

/// Analyze every line of a file as a separate document.
fn analyze_file(args: &AnalyzeFileArgs, cli_args: &KeyLookupArgs) -> Result<()> {
    let analyzer = build_analyzer(&args.options)?;
    let content = fs::read(&args.file)?;
    let lines = split_lines(&content);

    if cli_args.verbosity() > 1 {
        println!("Analyzing {} lines from: {}", lines.len(), args.file.display());
    }

    let start = Instant::now();
    let documents = if args.parallel {
        lines
            .par_iter()
            .enumerate()
            .map(|(i, line)| analyze_line(analyzer.as_ref(), i + 1, line))
            .collect::<Result<Vec<_>>>()?
    } else {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| analyze_line(analyzer.as_ref(), i + 1, line))
            .collect::<Result<Vec<_>>>()?
    };
    let duration = start.elapsed();

    let total_tokens = documents.iter().map(|d| d.token_count).sum();
    log::info!(
        "analyzed {} lines into {} tokens in {:?}",
        documents.len(),
        total_tokens,
        duration
    );

    output_result(
        "File analyzed",
        &FileAnalysisResult {
            analyzer: analyzer.name().to_string(),
            path: args.file.to_string_lossy().to_string(),
            documents,
            total_tokens,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Print the effective analyzer configuration.
fn show_config(args: &ConfigArgs, cli_args: &KeyLookupArgs) -> Result<()> {
    let config = args.options.analyzer_config()?;
    output_result("Analyzer configuration", &config, cli_args)
}

fn analyze_line(analyzer: &dyn Analyzer, line: usize, bytes: &[u8]) -> Result<DocumentTokens> {
    let tokens: Vec<Token> = analyzer.analyze_bytes(bytes)?.collect();
    Ok(DocumentTokens {
        line,
        token_count: tokens.len(),
        tokens,
    })
}

/// Split file content into lines, dropping `\r` line endings and the empty
/// tail after a final newline.
fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect();

    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
