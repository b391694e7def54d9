//! Command-line argument parsing for the madam binary
//!
//! Supports:
//! - Highlighting a file, stdin, or the system clipboard
//! - Overriding the configured highlight class
//! - Emitting bare markup lines or a complete HTML document

use clap::Parser;
use std::path::PathBuf;

/// A live palindrome highlighter
#[derive(Parser, Debug)]
#[command(name = "madam", version, about = "Highlight palindromic words in text")]
pub struct CliArgs {
    /// File to read; reads stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Read input from the system clipboard instead of a file or stdin
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// CSS class for the highlight marker (overrides the configured class)
    #[arg(long, value_name = "NAME")]
    pub class: Option<String>,

    /// Emit a complete HTML document instead of bare markup lines
    #[arg(short = 'd', long)]
    pub document: bool,
}

/// Where the raw input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read a file's contents
    File(PathBuf),
    /// Read the system clipboard's plain-text payload
    Clipboard,
    /// Read stdin to end
    Stdin,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Where to read the raw text from
    pub source: InputSource,
    /// Highlight class override, if any
    pub class: Option<String>,
    /// Wrap the output in a standalone HTML document
    pub document: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        let source = match (self.file, self.clipboard) {
            (Some(_), true) => {
                return Err("Cannot read both a file and the clipboard".to_string());
            }
            (Some(path), false) => InputSource::File(path),
            (None, true) => InputSource::Clipboard,
            (None, false) => InputSource::Stdin,
        };

        Ok(RunConfig {
            source,
            class: self.class,
            document: self.document,
        })
    }
}
