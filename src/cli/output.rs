//! Handles all user-facing output for the CLI.
//!
//! Centralizing the colorized summary, warning, and JSON printing here keeps
//! the command handlers free of terminal concerns.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::pipeline::RunReport;
use crate::record::TestCaseRecord;

/// Prints the green success line for a completed generation run.
pub fn print_summary(report: &RunReport) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    println!(
        "Successfully generated {} test case document{}.",
        report.records,
        if report.records == 1 { "" } else { "s" }
    );
    let _ = stdout.reset();
}

/// Prints a yellow warning line for graceful, non-fatal conditions.
pub fn print_warning(message: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
    println!("{}", message);
    let _ = stdout.reset();
}

/// Prints the human-readable listing for the `list` subcommand.
pub fn print_records(records: &[TestCaseRecord]) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for record in records {
        let _ = stdout.set_color(ColorSpec::new().set_bold(true));
        println!("{} ({})", record.name(), record.case_number());
        let _ = stdout.reset();
        if !record.story_reference.is_empty() {
            println!("  story: {}", record.story_reference);
        }
        if !record.description.is_empty() {
            println!("  description: {}", record.description);
        }
        for step in record.steps() {
            println!("  {}", step);
        }
    }
    println!("{} test case(s).", records.len());
}

/// Prints the `list --json` summary: names, case numbers, and step counts.
pub fn print_records_json(records: &[TestCaseRecord]) {
    let summary: Vec<serde_json::Value> = records
        .iter()
        .map(|record| {
            serde_json::json!({
                "name": record.name(),
                "case_number": record.case_number(),
                "story_reference": record.story_reference,
                "description": record.description,
                "pre_condition": record.pre_condition,
                "steps": record.steps(),
            })
        })
        .collect();
    println!("{}", serde_json::Value::Array(summary));
}
