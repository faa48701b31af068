//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::analysis::token::Token;
use crate::cli::args::{KeyLookupArgs, OutputFormat};
use crate::config::AnalyzerConfig;
use crate::error::Result;

/// Result structure for analyzing one text.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub analyzer: String,
    pub text: String,
    pub token_count: usize,
    pub tokens: Vec<Token>,
}

/// Tokens of one line of an input file.
#[derive(Debug, Serialize)]
pub struct DocumentTokens {
    pub line: usize,
    pub token_count: usize,
    pub tokens: Vec<Token>,
}

/// Result structure for analyzing a file.
#[derive(Debug, Serialize)]
pub struct FileAnalysisResult {
    pub analyzer: String,
    pub path: String,
    pub documents: Vec<DocumentTokens>,
    pub total_tokens: usize,
    pub duration_ms: u64,
}

/// Types that have a human-readable rendering.
pub trait HumanReadable {
    /// Write the human-readable form.
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanReadable for AnalysisResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Analyzer: {}", self.analyzer)?;
        writeln!(out, "Text: {:?}", self.text)?;
        writeln!(out, "Tokens ({}):", self.token_count)?;
        write_tokens(out, &self.tokens)
    }
}

impl HumanReadable for FileAnalysisResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Analyzer: {}", self.analyzer)?;
        writeln!(out, "File: {}", self.path)?;
        for document in &self.documents {
            writeln!(out)?;
            writeln!(
                out,
                "Line {} ({} tokens):",
                document.line, document.token_count
            )?;
            write_tokens(out, &document.tokens)?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Total: {} tokens in {} documents ({} ms)",
            self.total_tokens,
            self.documents.len(),
            self.duration_ms
        )
    }
}

impl HumanReadable for AnalyzerConfig {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        writeln!(out, "{json}")
    }
}

fn write_tokens(out: &mut dyn Write, tokens: &[Token]) -> io::Result<()> {
    for (i, token) in tokens.iter().enumerate() {
        writeln!(
            out,
            "  [{}] {:?} (offset: {}-{}, position: {}, increment: {}, type: {})",
            i,
            token.text,
            token.start_offset,
            token.end_offset,
            token.position,
            token.position_increment,
            token.token_type
        )?;
    }
    Ok(())
}

/// Output a result to stdout in the format selected on the command line.
pub fn output_result<T>(message: &str, result: &T, args: &KeyLookupArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)
}

/// Write a result in the format selected on the command line.
pub fn write_result<T>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &KeyLookupArgs,
) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out)?;
        }
        OutputFormat::Json => {
            if args.pretty {
                serde_json::to_writer_pretty(&mut *out, result)?;
            } else {
                serde_json::to_writer(&mut *out, result)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
