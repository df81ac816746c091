//! JSON array output writer.

use std::fs::File;
use std::io::BufWriter;

use super::ExportRecord;
use crate::error::Result;
use crate::message::AnalyzedMessage;

/// Writes analyzed messages as a pretty-printed JSON array.
pub fn write_json(messages: &[AnalyzedMessage], output_path: &str) -> Result<()> {
    let rows: Vec<ExportRecord<'_>> = messages.iter().map(ExportRecord::from).collect();
    let writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}

/// Converts analyzed messages to a pretty-printed JSON array string.
pub fn to_json(messages: &[AnalyzedMessage]) -> Result<String> {
    let rows: Vec<ExportRecord<'_>> = messages.iter().map(ExportRecord::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<AnalyzedMessage> {
        Pipeline::default()
            .ingest_transcript(
                "1/1/24, 23:59 - Asha: Happy new year 🎉🎉\n\
                 2/1/24, 14:00 - Ravi: This message was deleted",
            )
            .unwrap()
            .messages
    }

    #[test]
    fn test_to_json_fields() {
        let json = to_json(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = parsed.as_array().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["sender"], "Asha");
        assert_eq!(rows[0]["emojis"], "🎉🎉");
        assert_eq!(rows[0]["emoji_count"], 2);
        assert_eq!(rows[0]["interval"], "Night");
        assert_eq!(rows[0]["initiated_session"], false);
        assert_eq!(rows[1]["deleted"], true);
        assert_eq!(rows[1]["length"], 0);
        assert_eq!(rows[1]["initiated_session"], true);
        assert_eq!(rows[1]["timestamp"], "2024-01-02 14:00:00");
    }

    #[test]
    fn test_write_json_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_json(&sample(), path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with('['));
        assert!(content.contains(r#""weekday": "Monday""#));
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
