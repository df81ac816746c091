//! Transcript line parser.
//!
//! Android WhatsApp exports write one message per line in the form
//!
//! ```text
//! 12/5/23, 9:15 - Asha: Good morning everyone
//! ```
//!
//! Each line is matched independently. Lines that don't fit the grammar
//! (continuation lines of multi-line messages, system notices without a
//! sender) are dropped and counted in [`ParseOutcome::dropped_lines`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//!
//! let outcome = TranscriptParser::new().parse_str(
//!     "12/5/23, 9:15 - Asha: Good morning everyone\nsecond line of the same message",
//! )?;
//!
//! assert_eq!(outcome.messages.len(), 1);
//! assert_eq!(outcome.dropped_lines, 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use regex::Regex;
use tracing::{debug, warn};

use crate::RawMessage;
use crate::error::Result;

/// `<date>, <time> - <sender>: <body>`, matched as a line prefix.
pub const LINE_PATTERN: &str = r"^(\d{1,2}/\d{1,2}/\d{2}), (\d{1,2}:\d{2}) - (.*?): (.*)";

/// Messages matched from a transcript and the number of lines that weren't.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Matched records in transcript order
    pub messages: Vec<RawMessage>,
    /// Non-blank lines that did not match the line grammar
    pub dropped_lines: usize,
}

impl ParseOutcome {
    /// Number of non-blank lines seen.
    pub fn total_lines(&self) -> usize {
        self.messages.len() + self.dropped_lines
    }
}

/// Parser for Android-style WhatsApp transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser;

impl TranscriptParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a full transcript.
    ///
    /// An empty transcript yields an empty outcome. Blank lines are skipped
    /// without being counted as dropped.
    pub fn parse_str(&self, content: &str) -> Result<ParseOutcome> {
        let regex = Regex::new(LINE_PATTERN)?;
        let mut outcome = ParseOutcome::default();

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(&regex, line) {
                Some(msg) => outcome.messages.push(msg),
                None => outcome.dropped_lines += 1,
            }
        }

        debug!(
            messages = outcome.messages.len(),
            dropped = outcome.dropped_lines,
            "parsed transcript"
        );
        if outcome.dropped_lines > 0 {
            warn!(
                dropped = outcome.dropped_lines,
                "transcript lines did not match the message grammar and were dropped"
            );
        }

        Ok(outcome)
    }
}

fn parse_line(regex: &Regex, line: &str) -> Option<RawMessage> {
    let caps = regex.captures(line)?;
    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    let (date, time, sender, body) = (field(1), field(2), field(3), field(4));
    if sender.is_empty() || body.is_empty() {
        return None;
    }

    Some(RawMessage::new(date, time, sender, body))
}
