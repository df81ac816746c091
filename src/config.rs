//! Configuration for the ingestion pipeline.
//!
//! Every constant the pipeline depends on lives in [`PipelineConfig`] rather
//! than as a literal inside a stage, so callers can load overrides from JSON
//! and tests can pin exact values.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{DateConvention, PipelineConfig};
//!
//! let config = PipelineConfig::new()
//!     .with_date_convention(DateConvention::MonthDayYear)
//!     .with_session_gap_hours(6);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};

/// Order of the day and month fields in the transcript's `D/D/YY` dates.
///
/// Exports carry no marker for this, so it is fixed by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateConvention {
    /// `15/1/24` is 15 January 2024
    #[default]
    DayMonthYear,
    /// `1/15/24` is 15 January 2024
    MonthDayYear,
}

impl DateConvention {
    /// Returns the chrono format for a `"<date>, <time>"` string.
    pub fn datetime_format(self) -> &'static str {
        match self {
            DateConvention::DayMonthYear => "%d/%m/%y, %H:%M",
            DateConvention::MonthDayYear => "%m/%d/%y, %H:%M",
        }
    }
}

/// Hour boundaries splitting the day into four intervals.
///
/// Morning is `[morning, afternoon)`, Afternoon `[afternoon, evening)`,
/// Evening `[evening, night)`, and Night everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalBounds {
    pub morning: u32,
    pub afternoon: u32,
    pub evening: u32,
    pub night: u32,
}

impl Default for IntervalBounds {
    fn default() -> Self {
        Self {
            morning: 6,
            afternoon: 12,
            evening: 18,
            night: 21,
        }
    }
}

/// Configuration shared by the archive reader, parser, enricher and analyzer.
///
/// Deserialization fills missing fields from [`Default`], so a JSON file only
/// needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Archive entry suffix identifying the transcript (default: ".txt")
    pub transcript_extension: String,

    /// Day/month order of transcript dates (default: day/month/2-digit-year)
    pub date_convention: DateConvention,

    /// Silence longer than this starts a new session (default: 11)
    pub session_gap_hours: u32,

    /// Time-of-day interval boundaries (default: 6/12/18/21)
    pub intervals: IntervalBounds,

    /// Placeholder WhatsApp writes for attachments (default: "<Media omitted>")
    pub media_marker: String,

    /// Text the media marker is rewritten to in the normalised body (default: "Media")
    pub media_label: String,

    /// Bodies that mark a deleted message
    pub deletion_notices: Vec<String>,

    /// Substrings of the whitespace-free, lowercased body that flag a greeting
    pub greeting_keywords: Vec<String>,

    /// Cleaned text containing this substring is blanked (default: "http")
    pub url_marker: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            transcript_extension: ".txt".to_string(),
            date_convention: DateConvention::default(),
            session_gap_hours: 11,
            intervals: IntervalBounds::default(),
            media_marker: "<Media omitted>".to_string(),
            media_label: "Media".to_string(),
            deletion_notices: vec![
                "This message was deleted".to_string(),
                "You deleted this message".to_string(),
            ],
            greeting_keywords: vec![
                "goodnight".to_string(),
                "goodmorning".to_string(),
                "goodmoring".to_string(),
                "shubhratri".to_string(),
                "suprabhat".to_string(),
            ],
            url_marker: "http".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Checks that the values are mutually consistent.
    pub fn validate(&self) -> Result<()> {
        let b = &self.intervals;
        if !(b.morning < b.afternoon && b.afternoon < b.evening && b.evening < b.night) {
            return Err(ChatlensError::invalid_config(format!(
                "interval bounds must increase: {}/{}/{}/{}",
                b.morning, b.afternoon, b.evening, b.night
            )));
        }
        if b.night > 24 {
            return Err(ChatlensError::invalid_config(format!(
                "night bound {} is past midnight",
                b.night
            )));
        }
        if self.session_gap_hours == 0 {
            return Err(ChatlensError::invalid_config(
                "session gap must be at least one hour",
            ));
        }
        if self.media_marker.is_empty() {
            return Err(ChatlensError::invalid_config("media marker is empty"));
        }
        if self.transcript_extension.is_empty() {
            return Err(ChatlensError::invalid_config(
                "transcript extension is empty",
            ));
        }
        Ok(())
    }

    /// Sets the date convention.
    #[must_use]
    pub fn with_date_convention(mut self, convention: DateConvention) -> Self {
        self.date_convention = convention;
        self
    }

    /// Sets the session gap threshold in hours.
    #[must_use]
    pub fn with_session_gap_hours(mut self, hours: u32) -> Self {
        self.session_gap_hours = hours;
        self
    }

    /// Sets the time-of-day interval boundaries.
    #[must_use]
    pub fn with_intervals(mut self, intervals: IntervalBounds) -> Self {
        self.intervals = intervals;
        self
    }

    /// Sets the transcript entry extension.
    #[must_use]
    pub fn with_transcript_extension(mut self, extension: impl Into<String>) -> Self {
        self.transcript_extension = extension.into();
        self
    }

    /// Replaces the greeting keyword set.
    #[must_use]
    pub fn with_greeting_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.greeting_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if `body` is one of the deletion notices.
    pub fn is_deletion_notice(&self, body: &str) -> bool {
        self.deletion_notices.iter().any(|n| n == body)
    }
}
