//! Stopword vocabulary for the tokenizer.
//!
//! The tokenizer never reaches for a global list; it is handed a
//! [`Stopwords`] value at construction. [`Stopwords::builtin`] combines the
//! English list from the `stop-words` crate with an embedded list of
//! transliterated Hindi function words, which covers the mixed vocabulary of
//! typical Hinglish chats.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use stop_words::{LANGUAGE, get};

use crate::error::Result;

const HINGLISH: &str = include_str!("hinglish_stopwords.txt");

/// A set of lowercase words excluded from word-frequency statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// An empty vocabulary: nothing is filtered.
    pub fn none() -> Self {
        Self::default()
    }

    /// English plus transliterated Hindi stopwords.
    pub fn builtin() -> Self {
        let english = get(LANGUAGE::English).iter().map(ToString::to_string).collect::<Vec<_>>();
        let mut stopwords = Self::from_words(english);
        stopwords.extend(parse_list(HINGLISH));
        stopwords
    }

    /// Builds a vocabulary from explicit words (lowercased).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = Self::default();
        stopwords.extend(words);
        stopwords
    }

    /// Loads one word per line; blank lines and `#` comments are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(parse_list(&content)))
    }

    /// Adds more words to the vocabulary.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
    }

    /// Adds every word of `other`.
    pub fn merge(&mut self, other: Stopwords) {
        self.words.extend(other.words);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn parse_list(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
