//! Feature derivation and reporting over parsed chat records.
//!
//! This module contains:
//! - [`enrich`] - Categorical, temporal and session features
//! - [`analyze`] - Emoji, cleaned-text and greeting features
//! - [`stopwords`] / [`tokenize`] - Word frequencies
//! - [`filter`] - Year, month and sender filters
//! - [`stats`] - Group-by summaries
//! - [`output`] - Format writers (CSV, JSON, JSONL)

pub mod analyze;
pub mod enrich;
pub mod filter;
pub mod output;
pub mod stats;
pub mod stopwords;
pub mod tokenize;

// Re-export main types for convenience
pub use analyze::analyze;
pub use enrich::{enrich, sort_chronologically};
pub use filter::{FilterConfig, apply_filters};
pub use stats::ChatSummary;
pub use stopwords::Stopwords;
pub use tokenize::{Tokenizer, WordFrequencies};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
