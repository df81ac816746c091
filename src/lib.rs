//! # Chatlens
//!
//! Turn an exported WhatsApp chat archive into an enriched, analyzable
//! record set.
//!
//! ## Overview
//!
//! A WhatsApp "Export chat" produces a zip archive holding a plain-text
//! transcript. Chatlens runs that export through a fixed batch pipeline:
//!
//! 1. [`archive`] finds and decodes the transcript entry
//! 2. [`parser`] matches each line against the export grammar
//! 3. [`core::enrich`] derives content kind, deletion status, calendar
//!    fields, time-of-day interval, effective length and session starts
//! 4. [`core::analyze`] extracts emojis, a cleaned lowercase text and a
//!    greeting flag
//!
//! On top of the record set, [`core::tokenize`] ranks stopword-filtered
//! words, [`core::stats`] answers the usual group-by questions and
//! [`core::output`] exports rows as CSV, JSON or JSON Lines.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let pipeline = Pipeline::default();
//!     let report = pipeline.ingest_path("WhatsApp Chat.zip".as_ref())?;
//!     println!("{} messages, {} dropped lines", report.messages.len(), report.dropped_lines);
//!
//!     let tokenizer = Tokenizer::new(Stopwords::builtin(), pipeline.config());
//!     let words = tokenizer.message_frequencies(&report.messages)?;
//!     for row in words.top(10) {
//!         println!("{:>6}  {}", row.count, row.word);
//!     }
//!
//!     write_csv(&report.messages, "chat.csv")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`pipeline`] - [`Pipeline`](pipeline::Pipeline), one-call ingestion
//! - [`config`] - [`PipelineConfig`](config::PipelineConfig) and its constants
//! - [`message`] - [`RawMessage`], [`EnrichedMessage`], [`AnalyzedMessage`]
//! - [`core`] - Feature derivation, filtering, statistics and output
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;
pub mod pipeline;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::{AnalyzedMessage, EnrichedMessage, RawMessage};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Record types
    pub use crate::message::{
        AnalyzedMessage, ContentKind, DeletionStatus, EnrichedMessage, RawMessage, TimeInterval,
    };

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Configuration
    pub use crate::config::{DateConvention, IntervalBounds, PipelineConfig};

    // Pipeline stages
    pub use crate::archive::{read_transcript, read_transcript_file};
    pub use crate::core::{analyze, enrich};
    pub use crate::parser::TranscriptParser;
    pub use crate::pipeline::{IngestReport, Pipeline};

    // Reporting
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::stats::ChatSummary;
    pub use crate::core::stopwords::Stopwords;
    pub use crate::core::tokenize::{Tokenizer, WordFrequencies};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::format::{OutputFormat, write_to_format};
}
