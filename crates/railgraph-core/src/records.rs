//! Utilities for records output format
//!
//! Records are line-oriented: one `H` header line per command, then one line
//! per fact, each starting with a single-letter kind.

use crate::network::Stop;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the header line for a command in records format
///
/// Returns a line like `H railgraph=1 records=1 mode=route from="Metz"`.
pub fn format_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H railgraph=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Quote a free-text value for a header field
pub fn quoted(value: &str) -> String {
    format!("\"{}\"", escape_quotes(value))
}

/// Format one stop as an `S` line: index, ID, quoted name and line label
pub fn format_stop(index: usize, stop: &Stop) -> String {
    format!(
        "S {} {} {} line={}",
        index,
        stop.id,
        quoted(&stop.name),
        stop.line.as_deref().unwrap_or("-")
    )
}
