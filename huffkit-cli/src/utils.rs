//! Utility functions for the CLI.

use huffkit::{EncodeReport, FrequencyEntry, Node};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Read text from a file, or from stdin when the path is `-`.
pub fn read_source(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()
        }
    }
}

/// Serialize `value` as JSON followed by a newline.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');
    Ok(json)
}

/// Quoted, escaped form of a symbol so whitespace stays visible.
pub fn display_symbol(symbol: char) -> String {
    format!("{:?}", symbol)
}

/// Frequencies as a table, most frequent last.
pub fn format_frequencies(entries: &[FrequencyEntry]) -> String {
    let mut out = String::new();
    let total: u64 = entries.iter().map(|e| e.count).sum();

    let _ = writeln!(out, "{:>8} {:>8} {:>7}", "Symbol", "Count", "Share");
    let _ = writeln!(out, "{}", "-".repeat(25));
    for entry in entries {
        let share = if total > 0 {
            entry.count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let _ = writeln!(
            out,
            "{:>8} {:>8} {:>6.1}%",
            display_symbol(entry.symbol),
            entry.count,
            share
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(25));
    let _ = writeln!(out, "{:>8} {:>8}  {} distinct", "", total, entries.len());
    out
}

/// Human-readable summary of one encoded field.
pub fn format_report(field: &str, report: &EncodeReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Field: {}", field);
    let _ = writeln!(out, "  Original: {}", report.original);
    let _ = writeln!(
        out,
        "  Encoded:  {} ({} bits)",
        report.encoded, report.stats.encoded_bits
    );
    let _ = writeln!(out, "  Decoded:  {}", report.decoded);
    let _ = writeln!(out);
    let _ = writeln!(out, "  {:>8} {:>6}  Code", "Symbol", "Count");
    let _ = writeln!(out, "  {}", "-".repeat(30));

    // Most frequent (shortest code) first.
    for entry in report.frequencies.iter().rev() {
        let code = report.codes.get(entry.symbol).unwrap_or("-");
        let _ = writeln!(
            out,
            "  {:>8} {:>6}  {}",
            display_symbol(entry.symbol),
            entry.count,
            code
        );
    }

    let stats = &report.stats;
    let _ = writeln!(out, "  {}", "-".repeat(30));
    let _ = writeln!(
        out,
        "  {} symbols, {} distinct, {:.2} bits/symbol, {} of {} UTF-8 bits ({:.1}%)",
        stats.symbols,
        stats.distinct,
        stats.average_code_length,
        stats.encoded_bits,
        stats.original_bits,
        stats.ratio * 100.0
    );
    out
}

/// Indented outline of a tree, one node per line.
pub fn format_outline(root: &Node) -> String {
    let mut out = String::new();
    outline_node(&mut out, root, 0, "root");
    out
}

fn outline_node(out: &mut String, node: &Node, depth: usize, branch: &str) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Leaf { symbol, weight } => {
            let _ = writeln!(
                out,
                "{}{}: {} [{}]",
                indent,
                branch,
                display_symbol(*symbol),
                weight
            );
        }
        Node::Internal {
            weight,
            left,
            right,
        } => {
            let _ = writeln!(out, "{}{}: [{}]", indent, branch, weight);
            outline_node(out, left, depth + 1, "0");
            outline_node(out, right, depth + 1, "1");
        }
    }
}

/// File-name-safe form of a field label.
pub fn sanitize_label(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "field".to_string()
    } else {
        cleaned
    }
}
