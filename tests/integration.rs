//! Integration tests for chatlens.
//!
//! These drive the full pipeline through the public API, starting from zip
//! archives built in memory the way WhatsApp lays them out.

use std::io::{Cursor, Write};

use chatlens::archive::read_transcript;
use chatlens::config::{DateConvention, IntervalBounds, PipelineConfig};
use chatlens::core::filter::{FilterConfig, apply_filters};
use chatlens::core::stats::ChatSummary;
use chatlens::core::stopwords::Stopwords;
use chatlens::core::tokenize::Tokenizer;
use chatlens::message::{ContentKind, DeletionStatus, TimeInterval};
use chatlens::pipeline::Pipeline;
use zip::write::SimpleFileOptions;

// ============================================================================
// Fixtures
// ============================================================================

fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

const FAMILY_CHAT: &str = "\
12/5/23, 9:15 - Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
12/5/23, 9:15 - Asha: Good morning everyone ☀️🌸
12/5/23, 9:17 - Ravi: <Media omitted>
12/5/23, 9:20 - Meena: Suprabhat 🙏🙏
12/5/23, 13:05 - Ravi: lunch ho gaya? pizza party tonight
with a second line that WhatsApp does not prefix

12/5/23, 19:45 - Asha: This message was deleted
12/5/23, 22:10 - Meena: pizza was great 😂😂😂
13/5/23, 10:30 - Ravi: good night was yesterday, aaj pizza again? https://maps.example.com
13/5/23, 10:31 - Asha: You deleted this message
";

fn family_zip() -> Vec<u8> {
    build_zip(&[
        ("IMG-20230512-WA0001.jpg", b"\xff\xd8\xff\xe0"),
        ("WhatsApp Chat with Family.txt", FAMILY_CHAT.as_bytes()),
    ])
}

// ============================================================================
// Ingestion
// ============================================================================

#[test]
fn test_ingest_zip_counts() {
    let report = Pipeline::default().ingest_bytes(&family_zip()).unwrap();

    assert_eq!(
        report.entry_name.as_deref(),
        Some("WhatsApp Chat with Family.txt")
    );
    // encryption notice (no sender colon) and the continuation line drop
    assert_eq!(report.dropped_lines, 2);
    assert_eq!(report.messages.len(), 8);
    assert_eq!(
        report.stats.total_lines,
        report.messages.len() + report.dropped_lines
    );
}

#[test]
fn test_ingest_zip_features() {
    let report = Pipeline::default().ingest_bytes(&family_zip()).unwrap();
    let msgs = &report.messages;

    let asha = &msgs[0];
    assert_eq!(asha.sender(), "Asha");
    assert_eq!(asha.enriched.weekday, "Friday");
    assert_eq!(asha.enriched.month, "May");
    assert_eq!(asha.enriched.year, 2023);
    assert_eq!(asha.enriched.interval, TimeInterval::Morning);
    assert!(asha.greeting);
    assert!(!asha.enriched.initiated_session);

    let media = &msgs[1];
    assert_eq!(media.enriched.content_kind, ContentKind::Media);
    assert_eq!(media.body(), "Media");
    assert_eq!(media.enriched.raw.message, "<Media omitted>");
    assert_eq!(media.enriched.length, 0);

    let suprabhat = &msgs[2];
    assert!(suprabhat.greeting);
    assert_eq!(suprabhat.emoji_count, 2);

    let lunch = &msgs[3];
    assert_eq!(lunch.enriched.interval, TimeInterval::Afternoon);
    assert_eq!(lunch.body(), "lunch ho gaya? pizza party tonight");

    let deleted = &msgs[4];
    assert_eq!(deleted.enriched.deletion, DeletionStatus::Deleted);
    assert_eq!(deleted.enriched.interval, TimeInterval::Evening);
    assert_eq!(deleted.enriched.length, 0);

    let night = &msgs[5];
    assert_eq!(night.enriched.interval, TimeInterval::Night);
    assert_eq!(night.emojis, vec!['😂', '😂', '😂']);

    // 22:10 -> 10:30 next day is a 12h20m silence
    let next_day = &msgs[6];
    assert!(next_day.enriched.initiated_session);
    assert_eq!(next_day.enriched.weekday, "Saturday");
    assert!(next_day.greeting);
    assert_eq!(next_day.cleaned_text, "");

    assert_eq!(msgs[7].enriched.deletion, DeletionStatus::Deleted);
}

#[test]
fn test_ingest_path_zip_and_bare_txt() {
    let dir = tempfile::tempdir().unwrap();

    let zip_path = dir.path().join("export.zip");
    std::fs::write(&zip_path, family_zip()).unwrap();
    let from_zip = Pipeline::default().ingest_path(&zip_path).unwrap();

    let txt_path = dir.path().join("WhatsApp Chat with Family.txt");
    std::fs::write(&txt_path, FAMILY_CHAT).unwrap();
    let from_txt = Pipeline::default().ingest_path(&txt_path).unwrap();

    assert_eq!(from_zip.messages, from_txt.messages);
    assert_eq!(from_zip.dropped_lines, from_txt.dropped_lines);
}

#[test]
fn test_zip_without_transcript() {
    let bytes = build_zip(&[("photo.jpg", b"\xff\xd8"), ("notes.md", b"# hi")]);
    let err = Pipeline::default().ingest_bytes(&bytes).unwrap_err();
    assert!(err.is_no_transcript());
}

#[test]
fn test_not_a_zip() {
    let err = Pipeline::default()
        .ingest_bytes(b"definitely not a zip")
        .unwrap_err();
    assert!(matches!(err, chatlens::ChatlensError::Archive(_)));
}

#[test]
fn test_custom_transcript_extension() {
    let bytes = build_zip(&[
        ("chat.txt", b"1/1/24, 9:00 - A: wrong file"),
        ("chat.log", b"1/1/24, 9:00 - B: right file"),
    ]);
    let config = PipelineConfig::new().with_transcript_extension(".log");
    let transcript = read_transcript(&bytes, &config).unwrap();
    assert_eq!(transcript.entry_name, "chat.log");
}

#[test]
fn test_invalid_calendar_date_aborts_whole_run() {
    let bytes = build_zip(&[(
        "chat.txt",
        b"1/1/24, 9:00 - A: fine\n31/2/24, 9:00 - B: no such day\n" as &[u8],
    )]);
    let err = Pipeline::default().ingest_bytes(&bytes).unwrap_err();
    assert!(err.is_invalid_date());
    assert!(err.to_string().contains("31/2/24"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_month_first_convention() {
    let config = PipelineConfig::new().with_date_convention(DateConvention::MonthDayYear);
    let report = Pipeline::new(config)
        .ingest_transcript("12/5/23, 9:15 - Asha: hi")
        .unwrap();
    let msg = &report.messages[0];
    assert_eq!(msg.enriched.month, "Dec");
    assert_eq!(msg.enriched.weekday, "Tuesday");
}

#[test]
fn test_custom_session_gap_and_intervals() {
    let config = PipelineConfig::new()
        .with_session_gap_hours(1)
        .with_intervals(IntervalBounds {
            morning: 5,
            afternoon: 11,
            evening: 17,
            night: 20,
        });
    let report = Pipeline::new(config)
        .ingest_transcript("1/1/24, 5:00 - A: early\n1/1/24, 6:30 - B: later")
        .unwrap();

    assert_eq!(report.messages[0].enriched.interval, TimeInterval::Morning);
    assert!(report.messages[1].enriched.initiated_session);
}

#[test]
fn test_config_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chatlens.json");
    std::fs::write(
        &path,
        r#"{ "session_gap_hours": 2, "greeting_keywords": ["namaste"] }"#,
    )
    .unwrap();

    let config = PipelineConfig::from_json_file(&path).unwrap();
    assert_eq!(config.session_gap_hours, 2);
    assert_eq!(config.media_marker, "<Media omitted>");

    let report = Pipeline::new(config)
        .ingest_transcript("1/1/24, 9:00 - A: Namaste ji\n1/1/24, 9:01 - B: good morning")
        .unwrap();
    assert!(report.messages[0].greeting);
    assert!(!report.messages[1].greeting);
}

// ============================================================================
// Reporting over the record set
// ============================================================================

#[test]
fn test_word_frequencies_over_ingested_chat() {
    let pipeline = Pipeline::default();
    let report = pipeline.ingest_bytes(&family_zip()).unwrap();
    let tokenizer = Tokenizer::new(Stopwords::builtin(), pipeline.config());
    let words = tokenizer.message_frequencies(&report.messages).unwrap();

    assert_eq!(words.most_common(), Some(("pizza", 3)));
    assert_eq!(words.get("media"), None);
    assert_eq!(words.get("the"), None);
}

#[test]
fn test_filter_then_summarize() {
    let report = Pipeline::default().ingest_bytes(&family_zip()).unwrap();
    let filter = FilterConfig::new().with_year(2023).with_sender("ravi");
    let ravi = apply_filters(report.messages, &filter);
    assert_eq!(ravi.len(), 3);

    let summary = ChatSummary::from_messages(&ravi);
    assert_eq!(summary.media_messages, 1);
    assert_eq!(summary.sessions_started, 1);
    assert_eq!(summary.most_active_sender(), Some("Ravi"));
}

#[test]
fn test_summary_of_full_chat() {
    let report = Pipeline::default().ingest_bytes(&family_zip()).unwrap();
    let summary = ChatSummary::from_messages(&report.messages);

    assert_eq!(summary.total_messages, 8);
    assert_eq!(summary.deleted_messages, 2);
    assert_eq!(summary.greetings, 3);
    assert_eq!(summary.total_emojis, 6);
    assert_eq!(summary.top_emojis[0], ("😂".to_string(), 3));
    assert_eq!(
        summary.messages_by_weekday,
        vec![("Friday".to_string(), 6), ("Saturday".to_string(), 2)]
    );
}

#[test]
fn test_same_archive_twice_is_byte_identical() {
    let bytes = family_zip();
    let first = Pipeline::default().ingest_bytes(&bytes).unwrap();
    let second = Pipeline::default().ingest_bytes(&bytes).unwrap();

    assert_eq!(first.messages, second.messages);
    assert_eq!(
        chatlens::core::output::to_jsonl(&first.messages).unwrap(),
        chatlens::core::output::to_jsonl(&second.messages).unwrap()
    );
}
