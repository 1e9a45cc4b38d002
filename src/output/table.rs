//! Console table rendering of check results.
//!
//! One row per candidate with the same columns the upstream announcement
//! tables use: host, availability, status code, response time and a
//! human-readable reason when the candidate is not usable.

use crate::core::check::types::{CheckOutcome, ProbeResult};

const HEADERS: [&str; 5] = [
    "IP / Host",
    "Available",
    "Status Code",
    "Response time",
    "Why not available?",
];

/// Render the outcomes as an aligned table, one row per candidate.
///
/// `timeout_ms` is only used for the wording of timeout rows.
pub fn render_table(outcomes: &[CheckOutcome], timeout_ms: u64) -> String {
    let rows: Vec<[String; 5]> = outcomes.iter().map(|o| row(o, timeout_ms)).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for r in &rows {
        for (i, cell) in r.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    push_separator(&mut out, &widths);
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    push_separator(&mut out, &widths);
    for r in &rows {
        push_row(&mut out, r, &widths);
    }
    push_separator(&mut out, &widths);
    out
}

fn row(outcome: &CheckOutcome, timeout_ms: u64) -> [String; 5] {
    match &outcome.result {
        ProbeResult::Valid { time_ms } => [
            outcome.host.clone(),
            "Yes".to_string(),
            "200".to_string(),
            format!("{}ms", time_ms),
            "N/A".to_string(),
        ],
        ProbeResult::WrongStatus { status_code } => [
            outcome.host.clone(),
            "No".to_string(),
            status_code.to_string(),
            "N/A".to_string(),
            "The status code is not 200.".to_string(),
        ],
        ProbeResult::Timeout => [
            outcome.host.clone(),
            "No".to_string(),
            "N/A".to_string(),
            "N/A".to_string(),
            format!("No response within {}.", timeout_phrase(timeout_ms)),
        ],
        ProbeResult::TransportError { message } => [
            outcome.host.clone(),
            "No".to_string(),
            "N/A".to_string(),
            "N/A".to_string(),
            format!("An error occurred during the request: {}", message),
        ],
    }
}

fn timeout_phrase(timeout_ms: u64) -> String {
    if timeout_ms % 1000 == 0 {
        format!("{} seconds", timeout_ms / 1000)
    } else {
        format!("{}ms", timeout_ms)
    }
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize]) {
    for (cell, width) in cells.iter().zip(widths) {
        out.push_str("| ");
        out.push_str(cell);
        out.push_str(&" ".repeat(width - cell.len() + 1));
    }
    out.push_str("|\n");
}

fn push_separator(out: &mut String, widths: &[usize]) {
    for width in widths {
        out.push('+');
        out.push_str(&"-".repeat(width + 2));
    }
    out.push_str("+\n");
}
