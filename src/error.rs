//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum covering every terminal
//! failure of the ingestion pipeline.
//!
//! # Error Handling Philosophy
//!
//! - **Archive and decode failures** abort before any parsing happens
//! - **Unmatched transcript lines** are not errors; they are counted on
//!   [`ParseOutcome`](crate::parser::ParseOutcome) and dropped
//! - **Unresolvable dates** abort enrichment, since every later stage assumes
//!   a real calendar instant for every surviving record

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::RawMessage;
///
/// fn my_function() -> Result<Vec<RawMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading the input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be opened as a zip archive.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The archive holds no entry with the transcript extension.
    #[error("No transcript found: the archive has no entry ending in '{extension}'")]
    NoTranscriptFound {
        /// The extension that was searched for (e.g. ".txt")
        extension: String,
    },

    /// The transcript entry is not valid UTF-8.
    #[error("Transcript '{entry}' is not valid UTF-8: {source}")]
    Decode {
        /// Name of the archive entry (or file) being decoded
        entry: String,
        /// The underlying UTF-8 error
        #[source]
        source: FromUtf8Error,
    },

    /// Rendered output bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Where the conversion happened
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: FromUtf8Error,
    },

    /// A matched line's date/time does not resolve to a real instant.
    #[error("Invalid date '{date}, {time}': {reason}")]
    InvalidDate {
        /// Date text as it appeared in the transcript
        date: String,
        /// Time text as it appeared in the transcript
        time: String,
        /// Why resolution failed
        reason: String,
    },

    /// A line or token pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A configuration value is inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FromUtf8Error> for ChatlensError {
    fn from(err: FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a "no transcript" error for the given extension.
    pub fn no_transcript(extension: impl Into<String>) -> Self {
        ChatlensError::NoTranscriptFound {
            extension: extension.into(),
        }
    }

    /// Creates a decode error for the named entry.
    pub fn decode(entry: impl Into<String>, source: FromUtf8Error) -> Self {
        ChatlensError::Decode {
            entry: entry.into(),
            source,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(
        date: impl Into<String>,
        time: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ChatlensError::InvalidDate {
            date: date.into(),
            time: time.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatlensError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the archive had no transcript entry.
    pub fn is_no_transcript(&self) -> bool {
        matches!(self, ChatlensError::NoTranscriptFound { .. })
    }

    /// Returns `true` if the transcript bytes were not valid UTF-8.
    pub fn is_decode(&self) -> bool {
        matches!(self, ChatlensError::Decode { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_no_transcript_display() {
        let err = ChatlensError::no_transcript(".txt");
        assert!(err.to_string().contains(".txt"));
        assert!(err.is_no_transcript());
        assert!(!err.is_decode());
    }

    #[test]
    fn test_decode_display() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = ChatlensError::decode("WhatsApp Chat.txt", utf8_err);
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("WhatsApp Chat.txt"));
        assert!(err.is_decode());
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ChatlensError::invalid_date("31/13/23", "9:15", "month out of range");
        let display = err.to_string();
        assert!(display.contains("31/13/23"));
        assert!(display.contains("9:15"));
        assert!(display.contains("month out of range"));
        assert!(err.is_invalid_date());
        assert!(!err.is_io());
    }

    #[test]
    fn test_invalid_config_display() {
        let err = ChatlensError::invalid_config("session gap must be positive");
        assert!(err.to_string().contains("session gap"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatlensError::from(io_err);
        assert!(err.source().is_some());

        let utf8_err = String::from_utf8(vec![0xc3]).unwrap_err();
        let err = ChatlensError::decode("chat.txt", utf8_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatlensError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_from_zip_error() {
        let err: ChatlensError = zip::result::ZipError::FileNotFound.into();
        assert!(err.to_string().contains("Archive error"));
    }

    #[test]
    fn test_output_conversion_is_not_decode() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatlensError = utf8_err.into();
        assert!(matches!(err, ChatlensError::Utf8 { .. }));
        assert!(!err.is_decode());
        assert!(err.to_string().contains("output conversion"));
    }

    #[test]
    fn test_from_regex_error() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: ChatlensError = regex_err.into();
        assert!(err.to_string().contains("Invalid pattern"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatlensError::invalid_date("1/1/23", "25:00", "bad hour");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidDate"));
    }
}
