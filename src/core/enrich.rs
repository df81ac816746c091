//! Feature derivation over parsed messages.
//!
//! [`enrich`] turns each [`RawMessage`] into an [`EnrichedMessage`] carrying
//! its content kind, deletion status, resolved timestamp, calendar labels,
//! time-of-day interval, effective length and session-start flag.
//!
//! # Session detection
//!
//! `initiated_session` compares each record with the one **before it in the
//! given order**. Enrichment never sorts. Callers who want gaps measured in
//! chronological order must call [`sort_chronologically`] first.
//!
//! # Example
//!
//! ```rust
//! use chatlens::RawMessage;
//! use chatlens::config::PipelineConfig;
//! use chatlens::core::enrich::enrich;
//! use chatlens::message::TimeInterval;
//!
//! let raw = vec![RawMessage::new("12/5/23", "9:15", "Asha", "Good morning everyone")];
//! let enriched = enrich(&raw, &PipelineConfig::default())?;
//!
//! assert_eq!(enriched[0].interval, TimeInterval::Morning);
//! assert_eq!(enriched[0].month, "May");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};
use tracing::debug;

use crate::config::PipelineConfig;
use crate::error::{ChatlensError, Result};
use crate::message::{ContentKind, DeletionStatus, EnrichedMessage, RawMessage, TimeInterval};

/// Month labels indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "March", "April", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Weekday labels indexed by days since Monday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Resolves a record's date and time text to an instant.
pub fn resolve_timestamp(raw: &RawMessage, config: &PipelineConfig) -> Result<NaiveDateTime> {
    let text = format!("{}, {}", raw.date, raw.time);
    NaiveDateTime::parse_from_str(&text, config.date_convention.datetime_format())
        .map_err(|e| ChatlensError::invalid_date(&raw.date, &raw.time, e.to_string()))
}

/// Returns the month label for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// Stable-sorts records by resolved timestamp.
///
/// Records with equal timestamps keep their transcript order.
pub fn sort_chronologically(
    messages: Vec<RawMessage>,
    config: &PipelineConfig,
) -> Result<Vec<RawMessage>> {
    let mut keyed = messages
        .into_iter()
        .map(|raw| resolve_timestamp(&raw, config).map(|ts| (ts, raw)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by_key(|(ts, _)| *ts);
    Ok(keyed.into_iter().map(|(_, raw)| raw).collect())
}

/// Derives features for every record, preserving order.
///
/// # Errors
///
/// Returns [`ChatlensError::InvalidDate`] for the first record whose date
/// or time does not resolve under the configured convention. No partial
/// result is returned.
pub fn enrich(messages: &[RawMessage], config: &PipelineConfig) -> Result<Vec<EnrichedMessage>> {
    let gap = TimeDelta::hours(i64::from(config.session_gap_hours));
    let mut enriched = Vec::with_capacity(messages.len());
    let mut previous: Option<NaiveDateTime> = None;

    for raw in messages {
        let timestamp = resolve_timestamp(raw, config)?;
        let initiated_session = previous.is_some_and(|prev| timestamp - prev > gap);
        previous = Some(timestamp);

        enriched.push(enrich_one(raw, timestamp, initiated_session, config)?);
    }

    debug!(
        records = enriched.len(),
        sessions = enriched.iter().filter(|m| m.initiated_session).count(),
        "enriched messages"
    );
    Ok(enriched)
}

fn enrich_one(
    raw: &RawMessage,
    timestamp: NaiveDateTime,
    initiated_session: bool,
    config: &PipelineConfig,
) -> Result<EnrichedMessage> {
    let content_kind = if raw.message.contains(&config.media_marker) {
        ContentKind::Media
    } else {
        ContentKind::Text
    };

    let body = raw.message.replace(&config.media_marker, &config.media_label);

    let deletion = if config.is_deletion_notice(&body) {
        DeletionStatus::Deleted
    } else {
        DeletionStatus::NotDeleted
    };

    let length = if body == config.media_label || config.is_deletion_notice(&body) {
        0
    } else {
        body.chars().count()
    };

    let month = month_name(timestamp.month()).ok_or_else(|| {
        ChatlensError::invalid_date(
            &raw.date,
            &raw.time,
            format!("month {} out of range", timestamp.month()),
        )
    })?;
    let weekday = WEEKDAY_NAMES[timestamp.weekday().num_days_from_monday() as usize];
    let hour = timestamp.hour();

    Ok(EnrichedMessage {
        raw: raw.clone(),
        body,
        content_kind,
        deletion,
        timestamp,
        year: timestamp.year(),
        month: month.to_string(),
        weekday: weekday.to_string(),
        hour,
        interval: TimeInterval::from_hour(hour, &config.intervals),
        length,
        initiated_session,
    })
}
