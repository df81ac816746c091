//! Filter analyzed messages by year, month and sender.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for narrowing an analyzed record set before computing
//! statistics or word frequencies over it.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Year | [`with_year`](FilterConfig::with_year) | Messages sent in that calendar year |
//! | Month | [`with_month`](FilterConfig::with_month) | Messages sent in that month of any year |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from a specific user |
//!
//! # Behavior Notes
//!
//! - Month accepts a month label ("Sept"), an English month name
//!   ("september") or a number ("9"), case-insensitively
//! - Sender matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic

use crate::core::enrich::{MONTH_NAMES, month_name};
use crate::error::{ChatlensError, Result};
use crate::message::AnalyzedMessage;

const FULL_MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Configuration for filtering messages by year, month and sender.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// let config = FilterConfig::new()
///     .with_year(2023)
///     .with_month("sept")?
///     .with_sender("Asha");
///
/// assert_eq!(config.month.as_deref(), Some("Sept"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only messages from this calendar year.
    pub year: Option<i32>,

    /// Include only messages from this month (canonical month label).
    pub month: Option<String>,

    /// Include only messages from this sender (case-insensitive).
    pub sender: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the month filter.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidConfig`] if `month` is not recognised.
    pub fn with_month(mut self, month: &str) -> Result<Self> {
        let label = canonical_month(month)
            .ok_or_else(|| ChatlensError::invalid_config(format!("unknown month '{month}'")))?;
        self.month = Some(label.to_string());
        Ok(self)
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.sender.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &AnalyzedMessage) -> bool {
        let enriched = &msg.enriched;
        if self.year.is_some_and(|y| enriched.year != y) {
            return false;
        }
        if let Some(ref month) = self.month {
            if enriched.month != *month {
                return false;
            }
        }
        if let Some(ref sender) = self.sender {
            if !enriched.sender().eq_ignore_ascii_case(sender) {
                return false;
            }
        }
        true
    }
}

/// Maps user input to a label from the month table.
fn canonical_month(input: &str) -> Option<&'static str> {
    let needle = input.trim().to_lowercase();
    if let Ok(number) = needle.parse::<u32>() {
        return month_name(number);
    }

    MONTH_NAMES
        .iter()
        .zip(FULL_MONTH_NAMES)
        .find(|(label, full)| label.to_lowercase() == needle || *full == needle)
        .map(|(label, _)| *label)
}

/// Filters analyzed messages, keeping only those matching all active filters.
///
/// If no filters are active, returns the original messages unchanged.
pub fn apply_filters(messages: Vec<AnalyzedMessage>, config: &FilterConfig) -> Vec<AnalyzedMessage> {
    if !config.is_active() {
        return messages;
    }

    messages.into_iter().filter(|msg| config.matches(msg)).collect()
}
