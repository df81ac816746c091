//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! ```rust
//! use chatlens::cli::OutputFormat;
//!
//! let format = OutputFormat::Jsonl;
//! assert_eq!(format.extension(), "jsonl");
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "chat_features.csv";

/// Turn an exported WhatsApp chat archive into an enriched,
/// analyzable record set.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens \"WhatsApp Chat with Family.zip\"
    chatlens chat.zip -o family.jsonl --format jsonl
    chatlens chat.zip --year 2023 --month sept --from Asha --summary
    chatlens \"WhatsApp Chat with Family.txt\" --top-words 20")]
pub struct Args {
    /// Exported chat archive (.zip) or bare transcript (.txt)
    pub input: PathBuf,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Keep only messages from this year
    #[arg(long, value_name = "YEAR")]
    pub year: Option<i32>,

    /// Keep only messages from this month (name, label or number)
    #[arg(long, value_name = "MONTH")]
    pub month: Option<String>,

    /// Keep only messages from this sender
    #[arg(long, value_name = "SENDER")]
    pub from: Option<String>,

    /// Sort messages by timestamp before computing sessions
    #[arg(long)]
    pub chronological: bool,

    /// JSON file overriding pipeline settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra stopwords, one per line
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Number of most frequent words to print
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_words: usize,

    /// Print per-sender and per-period statistics
    #[arg(long)]
    pub summary: bool,

    /// Log pipeline stages to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of rows
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Replaces the extension of the default output path to match `format`.
///
/// Explicit paths are returned unchanged.
pub fn adjust_output_extension(output: &str, format: OutputFormat) -> String {
    if output != DEFAULT_OUTPUT {
        return output.to_string();
    }
    format!("chat_features.{}", format.extension())
}
