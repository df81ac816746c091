//! Aggregate statistics over an analyzed record set.
//!
//! These are the group-by questions a chat report asks: who talks the most,
//! which weekday is busiest, who starts conversations, who uses the most
//! emojis. Every tally is a `Vec<(key, value)>` ordered by descending value;
//! keys with equal values keep the order in which they first appeared.
//! Response times are the exception: fastest first.

use std::collections::HashMap;

use serde::Serialize;

use crate::message::AnalyzedMessage;

/// Summary of a (possibly filtered) analyzed record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatSummary {
    pub total_messages: usize,
    pub media_messages: usize,
    pub deleted_messages: usize,
    pub sessions_started: usize,
    pub total_emojis: usize,
    pub greetings: usize,
    pub messages_by_sender: Vec<(String, usize)>,
    pub messages_by_weekday: Vec<(String, usize)>,
    pub messages_by_month: Vec<(String, usize)>,
    pub messages_by_interval: Vec<(String, usize)>,
    pub messages_by_hour: Vec<(String, usize)>,
    /// Busiest calendar dates, keyed by the transcript's date text
    pub messages_by_date: Vec<(String, usize)>,
    pub media_by_sender: Vec<(String, usize)>,
    pub deleted_by_sender: Vec<(String, usize)>,
    pub sessions_by_sender: Vec<(String, usize)>,
    pub emojis_by_sender: Vec<(String, usize)>,
    pub greetings_by_sender: Vec<(String, usize)>,
    pub top_emojis: Vec<(String, usize)>,
    pub average_length_by_sender: Vec<(String, f64)>,
    /// Mean hours before replying to someone else, fastest first
    pub average_response_hours_by_sender: Vec<(String, f64)>,
}

impl ChatSummary {
    pub fn from_messages(messages: &[AnalyzedMessage]) -> Self {
        let sender = |m: &AnalyzedMessage| m.sender().to_string();

        Self {
            total_messages: messages.len(),
            media_messages: messages.iter().filter(|m| m.enriched.is_media()).count(),
            deleted_messages: messages
                .iter()
                .filter(|m| m.enriched.deletion.is_deleted())
                .count(),
            sessions_started: messages
                .iter()
                .filter(|m| m.enriched.initiated_session)
                .count(),
            total_emojis: messages.iter().map(|m| m.emoji_count).sum(),
            greetings: messages.iter().filter(|m| m.greeting).count(),
            messages_by_sender: tally(messages, |m| Some((sender(m), 1))),
            messages_by_weekday: tally(messages, |m| Some((m.enriched.weekday.clone(), 1))),
            messages_by_month: tally(messages, |m| Some((m.enriched.month.clone(), 1))),
            messages_by_interval: tally(messages, |m| Some((m.enriched.interval.to_string(), 1))),
            messages_by_hour: tally(messages, |m| Some((m.enriched.hour.to_string(), 1))),
            messages_by_date: tally(messages, |m| Some((m.enriched.raw.date.clone(), 1))),
            media_by_sender: tally(messages, |m| m.enriched.is_media().then(|| (sender(m), 1))),
            deleted_by_sender: tally(messages, |m| {
                m.enriched.deletion.is_deleted().then(|| (sender(m), 1))
            }),
            sessions_by_sender: tally(messages, |m| {
                m.enriched.initiated_session.then(|| (sender(m), 1))
            }),
            emojis_by_sender: tally(messages, |m| Some((sender(m), m.emoji_count))),
            greetings_by_sender: tally(messages, |m| m.greeting.then(|| (sender(m), 1))),
            top_emojis: top_emojis(messages, None),
            average_length_by_sender: average_length_by_sender(messages),
            average_response_hours_by_sender: average_response_hours_by_sender(messages),
        }
    }

    /// The sender with the most messages.
    pub fn most_active_sender(&self) -> Option<&str> {
        self.messages_by_sender.first().map(|(s, _)| s.as_str())
    }

    /// The sender with the lowest mean response time.
    pub fn fastest_responder(&self) -> Option<&str> {
        self.average_response_hours_by_sender
            .first()
            .map(|(s, _)| s.as_str())
    }
}

/// Emoji usage counts, optionally restricted to one sender.
pub fn top_emojis(messages: &[AnalyzedMessage], sender: Option<&str>) -> Vec<(String, usize)> {
    let mut counts = Tally::default();
    for msg in messages {
        if sender.is_some_and(|s| msg.sender() != s) {
            continue;
        }
        for emoji in &msg.emojis {
            counts.add(emoji.to_string(), 1);
        }
    }
    counts.into_sorted()
}

/// Mean effective message length per sender, longest first.
pub fn average_length_by_sender(messages: &[AnalyzedMessage]) -> Vec<(String, f64)> {
    let totals = tally(messages, |m| Some((m.sender().to_string(), m.enriched.length)));
    let counts: HashMap<String, usize> =
        tally(messages, |m| Some((m.sender().to_string(), 1))).into_iter().collect();

    let mut averages: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(sender, total)| {
            let n = counts.get(&sender).copied().unwrap_or(1).max(1);
            (sender, total as f64 / n as f64)
        })
        .collect();
    averages.sort_by(|a, b| b.1.total_cmp(&a.1));
    averages
}

/// Mean time, in hours, each sender takes to answer a message from someone
/// else, fastest first.
///
/// Messages are put in timestamp order first (stable for equal instants).
/// A message counts as a response only when the previous message came from a
/// different sender; consecutive messages from one sender are skipped.
pub fn average_response_hours_by_sender(messages: &[AnalyzedMessage]) -> Vec<(String, f64)> {
    let mut ordered: Vec<&AnalyzedMessage> = messages.iter().collect();
    ordered.sort_by_key(|m| m.enriched.timestamp);

    let mut totals: Vec<(String, f64, usize)> = Vec::new();
    for pair in ordered.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if prev.sender() == cur.sender() {
            continue;
        }
        let hours = (cur.enriched.timestamp - prev.enriched.timestamp).num_seconds() as f64 / 3600.0;
        match totals.iter_mut().find(|(s, _, _)| s == cur.sender()) {
            Some(entry) => {
                entry.1 += hours;
                entry.2 += 1;
            }
            None => totals.push((cur.sender().to_string(), hours, 1)),
        }
    }

    let mut averages: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(sender, total, n)| (sender, total / n as f64))
        .collect();
    averages.sort_by(|a, b| a.1.total_cmp(&b.1));
    averages
}

fn tally<F>(messages: &[AnalyzedMessage], mut key: F) -> Vec<(String, usize)>
where
    F: FnMut(&AnalyzedMessage) -> Option<(String, usize)>,
{
    let mut counts = Tally::default();
    for msg in messages {
        if let Some((k, v)) = key(msg) {
            counts.add(k, v);
        }
    }
    counts.into_sorted()
}

/// Insertion-ordered counter.
#[derive(Default)]
struct Tally {
    index: HashMap<String, usize>,
    rows: Vec<(String, usize)>,
}

impl Tally {
    fn add(&mut self, key: String, value: usize) {
        match self.index.get(&key) {
            Some(&i) => self.rows[i].1 += value,
            None => {
                self.index.insert(key.clone(), self.rows.len());
                self.rows.push((key, value));
            }
        }
    }

    fn into_sorted(mut self) -> Vec<(String, usize)> {
        self.rows.sort_by(|a, b| b.1.cmp(&a.1));
        self.rows
    }
}
