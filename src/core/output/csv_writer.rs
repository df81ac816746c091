//! CSV output writer.

use std::fs::File;
use std::io::Write;

use super::ExportRecord;
use crate::error::Result;
use crate::message::AnalyzedMessage;

/// Writes analyzed messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Header row: the [`ExportRecord`] field names
/// - Encoding: UTF-8
pub fn write_csv(messages: &[AnalyzedMessage], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file)
}

/// Converts analyzed messages to a CSV string.
pub fn to_csv(messages: &[AnalyzedMessage]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[AnalyzedMessage], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    for msg in messages {
        writer.serialize(ExportRecord::from(msg))?;
    }

    writer.flush()?;
    Ok(())
}
