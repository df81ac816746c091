//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::debug;

use chatlens::ChatlensError;
use chatlens::cli::{Args, adjust_output_extension};
use chatlens::config::PipelineConfig;
use chatlens::core::{ChatSummary, FilterConfig, Stopwords, Tokenizer, apply_filters};
use chatlens::format::{OutputFormat, write_to_format};
use chatlens::logging::init_logging;
use chatlens::pipeline::Pipeline;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose)?;

    let output_path = adjust_output_extension(&args.output, args.format);

    // Print header
    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", args.format);

    let config = match args.config {
        Some(ref path) => {
            println!("⚙️  Config:  {}", path.display());
            PipelineConfig::from_json_file(path)?
        }
        None => PipelineConfig::default(),
    };

    // Build filter configuration
    let mut filter_config = FilterConfig::new();
    if let Some(year) = args.year {
        filter_config = filter_config.with_year(year);
        println!("📅 Year:    {}", year);
    }
    if let Some(ref month) = args.month {
        filter_config = filter_config.with_month(month)?;
        println!("📅 Month:   {}", month);
    }
    if let Some(ref from) = args.from {
        filter_config = filter_config.with_sender(from.clone());
        println!("👤 From:    {}", from);
    }
    println!();

    // Step 1: Ingest
    println!("⏳ Reading export...");
    let pipeline = Pipeline::new(config).chronological(args.chronological);
    let report = pipeline.ingest_path(&args.input)?;
    if let Some(ref entry) = report.entry_name {
        println!("   Transcript: {}", entry);
    }
    println!(
        "   Parsed {} messages, dropped {} lines ({:.2}s)",
        report.stats.parsed_messages,
        report.stats.dropped_lines,
        report.stats.elapsed.as_secs_f64()
    );
    let parsed_count = report.messages.len();

    // Step 2: Filter
    let messages = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filtered = apply_filters(report.messages, &filter_config);
        println!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        report.messages
    };

    // Step 3: Write output in selected format
    let lib_format: OutputFormat = args.format.into();
    println!("💾 Writing {}...", lib_format);
    let write_start = Instant::now();
    write_to_format(&messages, &output_path, lib_format)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    // Step 4: Word frequencies
    let mut stopwords = Stopwords::builtin();
    if let Some(ref path) = args.stopwords {
        stopwords.merge(Stopwords::from_file(path)?);
    }
    debug!(stopwords = stopwords.len(), "stopword set ready");
    let tokenizer = Tokenizer::new(stopwords, pipeline.config());
    let words = tokenizer.message_frequencies(&messages)?;

    let summary = ChatSummary::from_messages(&messages);

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    println!();
    println!("📊 Summary:");
    println!("   Parsed:    {} messages", parsed_count);
    if filter_config.is_active() {
        println!("   Filtered:  {} messages", messages.len());
    }
    println!("   Media:     {}", summary.media_messages);
    println!("   Deleted:   {}", summary.deleted_messages);
    println!("   Sessions:  {}", summary.sessions_started);
    println!("   Emojis:    {}", summary.total_emojis);
    println!("   Greetings: {}", summary.greetings);
    if let Some(sender) = summary.most_active_sender() {
        println!("   Most active: {}", sender);
    }

    if args.top_words > 0 && !words.is_empty() {
        println!();
        println!("🔤 Top words:");
        for row in words.top(args.top_words) {
            println!("   {:>6}  {}", row.count, row.word);
        }
    }

    if args.summary {
        print_summary(&summary);
    }

    // Performance stats
    let total_time = total_start.elapsed();
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = parsed_count as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}

/// Prints the group-by tables of a summary.
fn print_summary(summary: &ChatSummary) {
    let tables = [
        ("👥 Messages by sender", &summary.messages_by_sender),
        ("📆 Messages by weekday", &summary.messages_by_weekday),
        ("🗓️  Messages by month", &summary.messages_by_month),
        ("📌 Busiest dates", &summary.messages_by_date),
        ("🕒 Messages by interval", &summary.messages_by_interval),
        ("🚀 Sessions started by sender", &summary.sessions_by_sender),
        ("📎 Media by sender", &summary.media_by_sender),
        ("🗑️  Deleted by sender", &summary.deleted_by_sender),
        ("😀 Emojis by sender", &summary.emojis_by_sender),
        ("👋 Greetings by sender", &summary.greetings_by_sender),
        ("🏆 Top emojis", &summary.top_emojis),
    ];

    for (title, rows) in tables {
        if rows.is_empty() {
            continue;
        }
        println!();
        println!("{}:", title);
        for (key, count) in rows.iter().take(10) {
            println!("   {:>6}  {}", count, key);
        }
    }

    if !summary.average_length_by_sender.is_empty() {
        println!();
        println!("📏 Average length by sender:");
        for (sender, avg) in summary.average_length_by_sender.iter().take(10) {
            println!("   {:>6.1}  {}", avg, sender);
        }
    }

    if !summary.average_response_hours_by_sender.is_empty() {
        println!();
        println!("⏱️  Average response time by sender (hours):");
        for (sender, hours) in summary.average_response_hours_by_sender.iter().take(10) {
            println!("   {:>6.2}  {}", hours, sender);
        }
    }
}
