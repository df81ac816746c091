//! JSON Lines (JSONL) output writer.
//!
//! One compact JSON object per message, newline terminated. Suited to
//! line-oriented tooling and data loaders that read records incrementally.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::ExportRecord;
use crate::error::Result;
use crate::message::AnalyzedMessage;

/// Writes analyzed messages to JSONL (JSON Lines) format.
pub fn write_jsonl(messages: &[AnalyzedMessage], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(messages, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts analyzed messages to a JSONL string.
pub fn to_jsonl(messages: &[AnalyzedMessage]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(messages: &[AnalyzedMessage], writer: &mut W) -> Result<()> {
    for msg in messages {
        let line = serde_json::to_string(&ExportRecord::from(msg))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
