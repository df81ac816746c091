//! Stopword-filtered word frequencies.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::PipelineConfig;
//! use chatlens::core::stopwords::Stopwords;
//! use chatlens::core::tokenize::Tokenizer;
//!
//! let tokenizer = Tokenizer::new(Stopwords::from_words(["the"]), &PipelineConfig::default());
//! let freq = tokenizer.word_frequencies(["The cat, the hat!", "Media", "cat"])?;
//!
//! assert_eq!(freq.most_common(), Some(("cat", 2)));
//! assert_eq!(freq.get("media"), None);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;

use crate::config::PipelineConfig;
use crate::core::stopwords::Stopwords;
use crate::error::Result;
use crate::message::AnalyzedMessage;

/// Anything that is neither a word character nor whitespace.
const PUNCTUATION_PATTERN: &str = r"[^\w\s]";

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word counts ordered by descending count.
///
/// Words with equal counts keep the order in which they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordFrequencies {
    entries: Vec<WordCount>,
}

impl WordFrequencies {
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    /// The first `n` rows.
    pub fn top(&self, n: usize) -> &[WordCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn most_common(&self) -> Option<(&str, usize)> {
        self.entries.first().map(|e| (e.word.as_str(), e.count))
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.word == word).map(|e| e.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Splits message bodies into lowercase words and counts them.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Stopwords,
    excluded: String,
}

impl Tokenizer {
    /// Creates a tokenizer that drops `stopwords` and the configured media
    /// label token.
    pub fn new(stopwords: Stopwords, config: &PipelineConfig) -> Self {
        Self {
            stopwords,
            excluded: config.media_label.to_lowercase(),
        }
    }

    /// Overrides the token removed from every result, regardless of rank.
    #[must_use]
    pub fn with_excluded(mut self, token: impl AsRef<str>) -> Self {
        self.excluded = token.as_ref().to_lowercase();
        self
    }

    /// Counts words across `bodies`.
    pub fn word_frequencies<'a, I>(&self, bodies: I) -> Result<WordFrequencies>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let punctuation = Regex::new(PUNCTUATION_PATTERN)?;
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<WordCount> = Vec::new();

        for body in bodies {
            let stripped = punctuation.replace_all(body, "").to_lowercase();
            for word in stripped.split_whitespace() {
                if word == self.excluded || self.stopwords.contains(word) {
                    continue;
                }
                match index.get(word) {
                    Some(&i) => entries[i].count += 1,
                    None => {
                        index.insert(word.to_string(), entries.len());
                        entries.push(WordCount {
                            word: word.to_string(),
                            count: 1,
                        });
                    }
                }
            }
        }

        // stable: ties stay in first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(WordFrequencies { entries })
    }

    /// Counts words across the normalised bodies of analyzed records.
    pub fn message_frequencies(&self, messages: &[AnalyzedMessage]) -> Result<WordFrequencies> {
        self.word_frequencies(messages.iter().map(AnalyzedMessage::body))
    }
}
