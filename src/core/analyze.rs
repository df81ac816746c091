//! Per-message text and emoji features.
//!
//! All functions here look at one record at a time; there is no state shared
//! between records.
//!
//! Emoji detection is deliberately codepoint-based: any character outside the
//! Basic Multilingual Plane counts as one emoji. Skin-tone modifiers and
//! zero-width-joiner sequences are therefore counted per constituent
//! codepoint (a family emoji contributes three or four), and BMP symbols such
//! as `❤` are not counted at all. Downstream counts are defined against this
//! behaviour.

use crate::config::PipelineConfig;
use crate::message::{AnalyzedMessage, EnrichedMessage};

/// First codepoint of the supplementary planes.
const SUPPLEMENTARY_START: u32 = 0x1_0000;

/// Devanagari block, kept by [`clean_text`].
const DEVANAGARI: std::ops::RangeInclusive<char> = '\u{0900}'..='\u{097F}';

/// Analyzes every record, preserving order.
pub fn analyze(messages: &[EnrichedMessage], config: &PipelineConfig) -> Vec<AnalyzedMessage> {
    messages.iter().map(|m| analyze_one(m, config)).collect()
}

/// Analyzes a single record.
pub fn analyze_one(message: &EnrichedMessage, config: &PipelineConfig) -> AnalyzedMessage {
    let emojis = extract_emojis(&message.body);
    AnalyzedMessage {
        enriched: message.clone(),
        emoji_count: emojis.len(),
        emojis,
        cleaned_text: clean_text(&message.body, &config.url_marker),
        greeting: is_greeting(&message.body, &config.greeting_keywords),
    }
}

/// Returns every supplementary-plane codepoint in `text`, in order.
///
/// ```
/// use chatlens::core::analyze::extract_emojis;
///
/// assert_eq!(extract_emojis("ok 👍🏽!"), vec!['👍', '🏽']);
/// assert!(extract_emojis("❤ is in the BMP").is_empty());
/// ```
pub fn extract_emojis(text: &str) -> Vec<char> {
    text.chars()
        .filter(|&c| u32::from(c) >= SUPPLEMENTARY_START)
        .collect()
}

/// Strips everything except ASCII letters and digits, Devanagari and
/// whitespace, then lowercases and trims.
///
/// If the stripped text still contains `url_marker` the result is empty.
/// The marker test runs before lowercasing, so it is case-sensitive.
///
/// ```
/// use chatlens::core::analyze::clean_text;
///
/// assert_eq!(clean_text("  Hello, World!! ", "http"), "hello world");
/// assert_eq!(clean_text("see https://example.com", "http"), "");
/// ```
pub fn clean_text(text: &str, url_marker: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || DEVANAGARI.contains(c) || c.is_whitespace())
        .collect();

    if !url_marker.is_empty() && stripped.contains(url_marker) {
        return String::new();
    }

    stripped.to_lowercase().trim().to_string()
}

/// Returns `true` if the lowercased body, with all whitespace removed,
/// contains any keyword as a substring.
pub fn is_greeting(text: &str, keywords: &[String]) -> bool {
    let squashed: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    keywords
        .iter()
        .any(|k| !k.is_empty() && squashed.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawMessage;
    use crate::core::enrich::enrich;

    fn keywords() -> Vec<String> {
        PipelineConfig::default().greeting_keywords
    }

    #[test]
    fn test_extract_emojis_supplementary_only() {
        assert_eq!(extract_emojis("hi 😂😂 there 🎉"), vec!['😂', '😂', '🎉']);
        assert!(extract_emojis("plain text ✓ ☺").is_empty());
    }

    #[test]
    fn test_zwj_sequence_counted_per_codepoint() {
        // man, ZWJ, woman, ZWJ, girl: the joiners are BMP and skipped
        let family = "👨\u{200D}👩\u{200D}👧";
        assert_eq!(extract_emojis(family), vec!['👨', '👩', '👧']);
    }

    #[test]
    fn test_skin_tone_counted_separately() {
        assert_eq!(extract_emojis("👍🏽").len(), 2);
    }

    #[test]
    fn test_clean_text_keeps_devanagari() {
        assert_eq!(clean_text("नमस्ते, दोस्त!", "http"), "नमस्ते दोस्त");
    }

    #[test]
    fn test_clean_text_strips_emoji_and_punctuation() {
        assert_eq!(clean_text("WOW!!! 🎉 Great_job.", "http"), "wow  greatjob");
    }

    #[test]
    fn test_clean_text_url_blanks_whole_message() {
        assert_eq!(clean_text("check this http://x.io now", "http"), "");
        assert_eq!(clean_text("https://example.com/a?b=c", "http"), "");
    }

    #[test]
    fn test_clean_text_url_marker_case_sensitive() {
        assert_eq!(clean_text("HTTP is a protocol", "http"), "http is a protocol");
    }

    #[test]
    fn test_clean_text_drops_non_ascii_letters() {
        assert_eq!(clean_text("Café naïve", "http"), "caf nave");
    }

    #[test]
    fn test_greeting_detection() {
        let kw = keywords();
        assert!(is_greeting("Good morning everyone", &kw));
        assert!(is_greeting("GOOD NIGHT 😴", &kw));
        assert!(is_greeting("good moring", &kw));
        assert!(is_greeting("Shubh Ratri sabko", &kw));
        assert!(is_greeting("suprabhat!", &kw));
        assert!(!is_greeting("good evening", &kw));
        assert!(!is_greeting("", &kw));
    }

    #[test]
    fn test_greeting_substring_not_exact() {
        assert!(is_greeting("okgoodnightbye", &keywords()));
    }

    #[test]
    fn test_analyze_pipeline_example() {
        let config = PipelineConfig::default();
        let raw = vec![RawMessage::new(
            "12/5/23",
            "9:15",
            "Asha",
            "Good morning everyone ☀️🌸",
        )];
        let enriched = enrich(&raw, &config).unwrap();
        let analyzed = analyze(&enriched, &config);

        let msg = &analyzed[0];
        assert!(msg.greeting);
        assert_eq!(msg.emojis, vec!['🌸']);
        assert_eq!(msg.emoji_count, 1);
        assert_eq!(msg.cleaned_text, "good morning everyone");
    }

    #[test]
    fn test_analyze_media_body() {
        let config = PipelineConfig::default();
        let raw = vec![RawMessage::new("12/5/23", "9:15", "Asha", "<Media omitted>")];
        let analyzed = analyze(&enrich(&raw, &config).unwrap(), &config);
        assert_eq!(analyzed[0].cleaned_text, "media");
        assert_eq!(analyzed[0].emoji_count, 0);
        assert!(!analyzed[0].greeting);
    }
}
