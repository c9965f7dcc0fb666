//! Terminal output: field formatting and record diagnostics.

use crate::input::RecordError;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One diagnostic line per rejected record.
pub fn failure_lines(failures: &[RecordError]) -> Vec<String> {
    failures
        .iter()
        .map(|f| {
            format!(
                "{} line {}: '{}' -> {}",
                "SKIP".red(),
                f.line,
                f.text,
                f.error.to_string().yellow()
            )
        })
        .collect()
}

/// Report rejected records on stderr, followed by a count.
pub fn print_failures(failures: &[RecordError], total: usize) {
    if failures.is_empty() {
        return;
    }
    for line in failure_lines(failures) {
        eprintln!("{line}");
    }
    eprintln!(
        "{} {} of {} record(s) rejected",
        "NOTE".on_red(),
        failures.len(),
        total
    );
}
