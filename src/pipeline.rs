//! End-to-end ingestion: archive → transcript → records → features.
//!
//! # Example
//!
//! ```rust
//! use chatlens::pipeline::Pipeline;
//!
//! let report = Pipeline::default().ingest_transcript(
//!     "12/5/23, 9:15 - Asha: Good morning everyone\n\
//!      Random text without the colon-name pattern",
//! )?;
//!
//! assert_eq!(report.messages.len(), 1);
//! assert_eq!(report.dropped_lines, 1);
//! assert!(report.messages[0].greeting);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::archive::{Transcript, read_transcript, read_transcript_file};
use crate::config::PipelineConfig;
use crate::core::analyze::analyze;
use crate::core::enrich::{enrich, sort_chronologically};
use crate::error::Result;
use crate::message::AnalyzedMessage;
use crate::parser::TranscriptParser;

/// Counts and timings for one ingestion run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestStats {
    /// Non-blank transcript lines
    pub total_lines: usize,
    /// Lines that matched the grammar
    pub parsed_messages: usize,
    /// Lines that did not
    pub dropped_lines: usize,
    pub elapsed: Duration,
}

impl IngestStats {
    /// Share of non-blank lines that became records, as a percentage.
    pub fn parse_ratio(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        self.parsed_messages as f64 / self.total_lines as f64 * 100.0
    }
}

/// Result of ingesting one transcript.
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Archive entry (or file) the transcript was read from
    pub entry_name: Option<String>,
    /// Fully analyzed records
    pub messages: Vec<AnalyzedMessage>,
    /// Non-blank lines dropped by the parser
    pub dropped_lines: usize,
    pub stats: IngestStats,
}

/// The archive reader, parser, enricher and analyzer run as one batch.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    chronological: bool,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            chronological: false,
        }
    }

    /// Sort parsed records by timestamp before enrichment.
    ///
    /// Off by default: session gaps are measured in transcript order.
    #[must_use]
    pub fn chronological(mut self, enabled: bool) -> Self {
        self.chronological = enabled;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Ingests zip archive bytes.
    pub fn ingest_bytes(&self, bytes: &[u8]) -> Result<IngestReport> {
        self.config.validate()?;
        let start = Instant::now();
        let transcript = read_transcript(bytes, &self.config)?;
        self.run(transcript, start)
    }

    /// Ingests a zip archive or bare transcript from disk.
    pub fn ingest_path(&self, path: &Path) -> Result<IngestReport> {
        self.config.validate()?;
        let start = Instant::now();
        let transcript = read_transcript_file(path, &self.config)?;
        self.run(transcript, start)
    }

    /// Ingests transcript text directly.
    pub fn ingest_transcript(&self, text: &str) -> Result<IngestReport> {
        self.config.validate()?;
        let mut report = self.process(text, Instant::now())?;
        report.entry_name = None;
        Ok(report)
    }

    fn run(&self, transcript: Transcript, start: Instant) -> Result<IngestReport> {
        debug!(entry = %transcript.entry_name, "read transcript");
        let mut report = self.process(&transcript.text, start)?;
        report.entry_name = Some(transcript.entry_name);
        Ok(report)
    }

    /// Expects an already validated configuration.
    fn process(&self, text: &str, start: Instant) -> Result<IngestReport> {
        let outcome = TranscriptParser::new().parse_str(text)?;
        let total_lines = outcome.total_lines();
        let dropped_lines = outcome.dropped_lines;

        let raw = if self.chronological {
            sort_chronologically(outcome.messages, &self.config)?
        } else {
            outcome.messages
        };

        let enriched = enrich(&raw, &self.config)?;
        let messages = analyze(&enriched, &self.config);

        let stats = IngestStats {
            total_lines,
            parsed_messages: messages.len(),
            dropped_lines,
            elapsed: start.elapsed(),
        };
        info!(
            messages = stats.parsed_messages,
            dropped = stats.dropped_lines,
            elapsed_ms = stats.elapsed.as_millis(),
            "ingestion complete"
        );

        Ok(IngestReport {
            entry_name: None,
            messages,
            dropped_lines,
            stats,
        })
    }
}
