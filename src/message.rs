//! Record types produced by each pipeline stage.
//!
//! Each stage wraps its predecessor's record rather than mutating it:
//!
//! - [`RawMessage`] — one matched transcript line (parser output)
//! - [`EnrichedMessage`] — raw record plus categorical and temporal features
//! - [`AnalyzedMessage`] — enriched record plus text and emoji features
//!
//! # Examples
//!
//! ```
//! use chatlens::RawMessage;
//!
//! let msg = RawMessage::new("12/5/23", "9:15", "Asha", "Good morning everyone");
//! assert_eq!(msg.sender, "Asha");
//! assert_eq!(msg.message, "Good morning everyone");
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::IntervalBounds;

/// One chat message as matched from a transcript line.
///
/// All four fields are non-empty text exactly as written in the export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawMessage {
    /// Date text, `D/D/YY`
    pub date: String,
    /// Time text, `H:MM` (24-hour)
    pub time: String,
    /// Display name of the sender
    pub sender: String,
    /// Body text (first line only for multi-line messages)
    pub message: String,
}

impl RawMessage {
    /// Creates a new raw message.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            sender: sender.into(),
            message: message.into(),
        }
    }
}

/// Whether a message carried an attachment or plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Media,
    Text,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Media => write!(f, "Media"),
            ContentKind::Text => write!(f, "Text"),
        }
    }
}

/// Whether the body is a deletion notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeletionStatus {
    Deleted,
    NotDeleted,
}

impl DeletionStatus {
    pub fn is_deleted(self) -> bool {
        self == DeletionStatus::Deleted
    }
}

impl fmt::Display for DeletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionStatus::Deleted => write!(f, "Deleted"),
            DeletionStatus::NotDeleted => write!(f, "Not Deleted"),
        }
    }
}

/// Part of the day a message was sent in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInterval {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeInterval {
    /// Classifies an hour (0-23) against the given bounds.
    ///
    /// ```
    /// use chatlens::config::IntervalBounds;
    /// use chatlens::message::TimeInterval;
    ///
    /// let bounds = IntervalBounds::default();
    /// assert_eq!(TimeInterval::from_hour(6, &bounds), TimeInterval::Morning);
    /// assert_eq!(TimeInterval::from_hour(21, &bounds), TimeInterval::Night);
    /// ```
    pub fn from_hour(hour: u32, bounds: &IntervalBounds) -> Self {
        if (bounds.morning..bounds.afternoon).contains(&hour) {
            TimeInterval::Morning
        } else if (bounds.afternoon..bounds.evening).contains(&hour) {
            TimeInterval::Afternoon
        } else if (bounds.evening..bounds.night).contains(&hour) {
            TimeInterval::Evening
        } else {
            TimeInterval::Night
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeInterval::Morning => write!(f, "Morning"),
            TimeInterval::Afternoon => write!(f, "Afternoon"),
            TimeInterval::Evening => write!(f, "Evening"),
            TimeInterval::Night => write!(f, "Night"),
        }
    }
}

/// A raw message with categorical, temporal and session features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMessage {
    /// The parser's record, untouched
    #[serde(flatten)]
    pub raw: RawMessage,
    /// Body with the media marker rewritten to the media label
    pub body: String,
    pub content_kind: ContentKind,
    pub deletion: DeletionStatus,
    /// Combined date and time, resolved once under the date convention
    pub timestamp: NaiveDateTime,
    pub year: i32,
    /// Short month name from the fixed month table
    pub month: String,
    /// Weekday name, Monday first
    pub weekday: String,
    pub hour: u32,
    pub interval: TimeInterval,
    /// Character count of `body`, zero for placeholders and deletion notices
    pub length: usize,
    /// Sent after a silence longer than the session gap
    pub initiated_session: bool,
}

impl EnrichedMessage {
    pub fn sender(&self) -> &str {
        &self.raw.sender
    }

    pub fn is_media(&self) -> bool {
        self.content_kind == ContentKind::Media
    }
}

/// An enriched message with text and emoji features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedMessage {
    #[serde(flatten)]
    pub enriched: EnrichedMessage,
    /// Supplementary-plane codepoints in body order
    pub emojis: Vec<char>,
    pub emoji_count: usize,
    /// Lowercased body restricted to letters, digits, Devanagari and whitespace
    pub cleaned_text: String,
    /// Body contains a greeting keyword
    pub greeting: bool,
}

impl AnalyzedMessage {
    pub fn sender(&self) -> &str {
        self.enriched.sender()
    }

    pub fn body(&self) -> &str {
        &self.enriched.body
    }
}
