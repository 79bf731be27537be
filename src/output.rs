//! Output rendering for harness runs.
//!
//! Supports `human` (default) and `json` outputs. The JSON form is the
//! serialized `RunReport`: per-entry status plus a top-level summary.

use crate::models::{Entry, RunReport};
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && utils::colors_enabled()
}

/// Print a run report in the requested format.
pub fn print_report(report: &RunReport, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_report_json(report)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            println!("Comparing with known results...");
            for entry in &report.entries {
                println!("{}", render_entry(entry, color));
            }
            let summary = format!(
                "— Summary — files={} invocations={} warnings={} mismatches={}",
                report.summary.files,
                report.summary.invocations,
                report.summary.warnings,
                report.summary.mismatches
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
            let verdict = if report.passed() {
                "All warnings and errors match known results."
            } else {
                "Mismatch found, exiting with error code 1"
            };
            match (color, report.passed()) {
                (true, true) => println!("{}", verdict.green().bold()),
                (true, false) => println!("{}", verdict.red().bold()),
                _ => println!("{}", verdict),
            }
        }
    }
}

/// One human-readable line per comparison entry.
pub fn render_entry(entry: &Entry, color: bool) -> String {
    let text = match entry {
        Entry::Match { name, count } => format!("{} matches with count: {}", name, count),
        Entry::CountMismatch {
            name,
            found,
            expected,
        } => format!(
            "Mismatch for {}: found {}, expected {}",
            name, found, expected
        ),
        Entry::Unknown { name, .. } => format!("{} not found in known results", name),
        Entry::Missing { name, .. } => format!(
            "Warning or error {} exists in known results but was not found in current run",
            name
        ),
    };
    let icon = if entry.is_mismatch() { "✖" } else { "✔" };
    if !color {
        return format!("{} {}", icon, text);
    }
    if entry.is_mismatch() {
        format!("{} {}", icon.red(), text)
    } else {
        format!("{} {}", icon.green(), text.bright_black())
    }
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &RunReport) -> JsonVal {
    serde_json::to_value(report).unwrap_or(JsonVal::Null)
}
