//! Output formatting helpers for the `levain` CLI.

use std::io::{self, Write};

use serde::Serialize;

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a simple table with headers and rows.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write!(handle, "{}", render_table(headers, rows));
}

/// Render a table with columns padded to their widest cell.
///
/// Widths count characters, not bytes, so `°C` and tree glyphs line up.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header_cells, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        if i < last {
            if let Some(width) = widths.get(i) {
                let pad = width.saturating_sub(cell.chars().count());
                out.push_str(&" ".repeat(pad));
            }
        }
    }
    out.push('\n');
}

/// Grams with one decimal, dropping a trailing `.0`.
pub fn format_grams(grams: f64) -> String {
    format!("{} g", format_number(grams))
}

/// A number with at most one decimal, dropping a trailing `.0`.
pub fn format_number(value: f64) -> String {
    let s = format!("{:.1}", value);
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}
