//! Output format writers.
//!
//! Every writer emits one row per analyzed message with the same flat column
//! set, described by [`ExportRecord`]:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of rows - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one row per line - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{to_csv, write_csv, write_json, write_jsonl};
//! use chatlens::pipeline::Pipeline;
//!
//! let report = Pipeline::default().ingest_path("WhatsApp Chat.zip".as_ref())?;
//!
//! write_csv(&report.messages, "chat.csv")?;
//! write_json(&report.messages, "chat.json")?;
//! write_jsonl(&report.messages, "chat.jsonl")?;
//!
//! let csv_string = to_csv(&report.messages)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

use serde::Serialize;

use crate::message::{AnalyzedMessage, ContentKind, TimeInterval};

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Timestamp layout used in every output format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flat export row.
///
/// `message` is the body exactly as parsed; the media-normalised body only
/// shows up through `content_kind`, `length` and `cleaned_text`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub sender: &'a str,
    pub message: &'a str,
    pub content_kind: ContentKind,
    pub deleted: bool,
    pub timestamp: String,
    pub year: i32,
    pub month: &'a str,
    pub weekday: &'a str,
    pub hour: u32,
    pub interval: TimeInterval,
    pub length: usize,
    pub initiated_session: bool,
    /// Emoji codepoints concatenated in body order
    pub emojis: String,
    pub emoji_count: usize,
    pub cleaned_text: &'a str,
    pub greeting: bool,
}

impl<'a> From<&'a AnalyzedMessage> for ExportRecord<'a> {
    fn from(msg: &'a AnalyzedMessage) -> Self {
        let enriched = &msg.enriched;
        let raw = &enriched.raw;
        Self {
            date: &raw.date,
            time: &raw.time,
            sender: &raw.sender,
            message: &raw.message,
            content_kind: enriched.content_kind,
            deleted: enriched.deletion.is_deleted(),
            timestamp: enriched.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            year: enriched.year,
            month: &enriched.month,
            weekday: &enriched.weekday,
            hour: enriched.hour,
            interval: enriched.interval,
            length: enriched.length,
            initiated_session: enriched.initiated_session,
            emojis: msg.emojis.iter().collect(),
            emoji_count: msg.emoji_count,
            cleaned_text: &msg.cleaned_text,
            greeting: msg.greeting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawMessage;
    use crate::config::PipelineConfig;
    use crate::core::{analyze::analyze, enrich::enrich};

    #[test]
    fn test_export_record_fields() {
        let config = PipelineConfig::default();
        let raw = vec![RawMessage::new("12/5/23", "21:40", "Ravi", "<Media omitted>")];
        let analyzed = analyze(&enrich(&raw, &config).unwrap(), &config);

        let row = ExportRecord::from(&analyzed[0]);
        assert_eq!(row.message, "<Media omitted>");
        assert_eq!(row.content_kind, ContentKind::Media);
        assert_eq!(row.timestamp, "2023-05-12 21:40:00");
        assert_eq!(row.weekday, "Friday");
        assert_eq!(row.interval, TimeInterval::Night);
        assert_eq!(row.length, 0);
        assert!(row.emojis.is_empty());
        assert_eq!(row.cleaned_text, "media");
    }
}
