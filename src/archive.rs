//! Transcript extraction from exported chat archives.
//!
//! WhatsApp's "Export chat" produces a zip holding one `.txt` transcript plus
//! any attached media. Only the first entry whose name ends in the configured
//! transcript extension is read, in central-directory order.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use crate::config::PipelineConfig;
use crate::error::{ChatlensError, Result};

/// Decoded transcript text and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// Archive entry name, or the file name for bare transcripts
    pub entry_name: String,
    pub text: String,
}

/// Extracts the transcript from zip archive bytes.
///
/// # Errors
///
/// - [`ChatlensError::Archive`] if the bytes are not a readable zip
/// - [`ChatlensError::NoTranscriptFound`] if no entry has the transcript extension
/// - [`ChatlensError::Decode`] if the entry is not valid UTF-8
pub fn read_transcript(bytes: &[u8], config: &PipelineConfig) -> Result<Transcript> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let extension = config.transcript_extension.as_str();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() || !entry.name().ends_with(extension) {
            continue;
        }

        let entry_name = entry.name().to_string();
        let mut raw = Vec::new();
        entry.read_to_end(&mut raw)?;
        debug!(entry = %entry_name, bytes = raw.len(), "found transcript entry");

        let text = String::from_utf8(raw).map_err(|e| ChatlensError::decode(&entry_name, e))?;
        return Ok(Transcript { entry_name, text });
    }

    Err(ChatlensError::no_transcript(extension))
}

/// Reads a transcript from disk.
///
/// Paths ending in the transcript extension are decoded directly as text;
/// anything else is opened as a zip archive.
pub fn read_transcript_file(path: &Path, config: &PipelineConfig) -> Result<Transcript> {
    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if name.ends_with(&config.transcript_extension) {
        let text = String::from_utf8(bytes).map_err(|e| ChatlensError::decode(&name, e))?;
        return Ok(Transcript {
            entry_name: name,
            text,
        });
    }

    read_transcript(&bytes, config)
}
