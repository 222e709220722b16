//! Textual rendering of values and dicts
//!
//! A JSON-like debugging aid, not a serialization format: nothing parses it
//! back and it is not guaranteed to round-trip.
//!
//! # Format Examples
//!
//! - Int / UInt: `42`
//! - Float: `3.1415`, `2.0` (finite floats always carry a decimal point)
//! - Bool: `true` / `false`
//! - String: `"hello"` (with escaping)
//! - Sequence: `[1, 2.5, "x"]`
//! - Dict: `{"a": 1, "b": [true]}` (keys sorted)
//!
//! The summary mode prints strings bare and collapses nested containers to
//! `[...]` and `{...}`, which keeps log lines short for large bundles.

use crate::dict::Dict;
use crate::value::Value;

/// Configuration for rendered output
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Use pretty printing with indentation
    pub pretty: bool,
    /// Number of spaces per indentation level
    pub indent: usize,
    /// Bare strings, nested containers elided
    pub summary: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            summary: false,
        }
    }
}

impl RenderConfig {
    /// Create a compact (single-line) config
    pub fn compact() -> Self {
        Self::default()
    }

    /// Create a pretty-printed config
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// Create a summary config: bare strings, nested containers elided
    pub fn summary() -> Self {
        Self {
            summary: true,
            ..Self::default()
        }
    }
}

/// Render a value according to `config`
pub fn render_value(value: &Value, config: &RenderConfig) -> String {
    let mut buf = String::new();
    format_value(value, config, 0, &mut buf);
    buf
}

/// Render a dict according to `config`, keys sorted
pub fn render_dict(dict: &Dict, config: &RenderConfig) -> String {
    let mut buf = String::new();
    format_dict(dict, config, 0, &mut buf);
    buf
}

fn format_value(value: &Value, config: &RenderConfig, depth: usize, buf: &mut String) {
    match value {
        Value::Int(n) => buf.push_str(&n.to_string()),
        Value::UInt(n) => buf.push_str(&n.to_string()),
        Value::Float(f) => {
            let s = f.to_string();
            buf.push_str(&s);
            // Keep floats distinguishable from integers
            if !s.contains(['.', 'e', 'E']) && f.is_finite() {
                buf.push_str(".0");
            }
        }
        Value::Bool(b) => buf.push_str(if *b { "true" } else { "false" }),
        Value::String(s) if config.summary => buf.push_str(s),
        Value::String(s) => format_string(s, buf),
        Value::Seq(_) if config.summary && depth > 0 => buf.push_str("[...]"),
        Value::Seq(items) => format_seq(items, config, depth, buf),
        Value::Dict(_) if config.summary && depth > 0 => buf.push_str("{...}"),
        Value::Dict(dict) => format_dict(dict, config, depth, buf),
    }
}

/// Format a string with proper escaping
fn format_string(s: &str, buf: &mut String) {
    buf.push('"');
    for c in s.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '\x08' => buf.push_str("\\b"),
            '\x0C' => buf.push_str("\\f"),
            c if c.is_control() => {
                buf.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
}

fn format_seq(items: &[Value], config: &RenderConfig, depth: usize, buf: &mut String) {
    buf.push('[');
    if config.pretty && !items.is_empty() {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                buf.push(',');
            }
            buf.push('\n');
            push_indent(buf, depth + 1, config.indent);
            format_value(item, config, depth + 1, buf);
        }
        buf.push('\n');
        push_indent(buf, depth, config.indent);
    } else {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            format_value(item, config, depth + 1, buf);
        }
    }
    buf.push(']');
}

fn format_dict(dict: &Dict, config: &RenderConfig, depth: usize, buf: &mut String) {
    // Sorted keys keep the output deterministic
    let mut entries: Vec<_> = dict.iter().collect();
    entries.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));

    buf.push('{');
    if config.pretty && !entries.is_empty() {
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                buf.push(',');
            }
            buf.push('\n');
            push_indent(buf, depth + 1, config.indent);
            format_string(key, buf);
            buf.push_str(": ");
            format_value(value, config, depth + 1, buf);
        }
        buf.push('\n');
        push_indent(buf, depth, config.indent);
    } else {
        for (i, (key, value)) in entries.into_iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            format_string(key, buf);
            buf.push_str(": ");
            format_value(value, config, depth + 1, buf);
        }
    }
    buf.push('}');
}

/// Push indentation spaces
fn push_indent(buf: &mut String, depth: usize, indent_size: usize) {
    for _ in 0..(depth * indent_size) {
        buf.push(' ');
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_value(self, &RenderConfig::compact()))
    }
}

impl std::fmt::Display for Dict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_dict(self, &RenderConfig::compact()))
    }
}
