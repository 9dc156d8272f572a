//! JSON and JSONL front end.
//!
//! Integers keep their exact value through compaction, including the full
//! `i64` and `u64` ranges.

use crate::compact::compact;
use dc_core::{Node, Result};
use serde_json::Value;

/// Compact a parsed JSON document. The root must be an array or object.
pub fn compact_value(value: &Value) -> Result<Value> {
    let node = Node::from(value);
    Ok(Value::from(compact(&node)?))
}

/// Parse, compact, and re-serialize a JSON document.
///
/// Parsing follows `serde_json`, which rejects documents nested more than
/// 128 levels deep.
pub fn compact_str(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string(&compact_value(&value)?)?)
}

/// Compact a single JSONL line.
///
/// Lines that are not JSON, or whose root is not a container, are returned
/// trimmed but otherwise unchanged. That includes lines nested more than 128
/// levels deep, which `serde_json` refuses to parse; those are logged at
/// debug level.
pub fn compact_line(line: &str) -> String {
    let line = line.trim();
    if line.is_empty() {
        return String::new();
    }

    match compact_str(line) {
        Ok(out) => out,
        Err(err) => {
            tracing::debug!(%err, "line passed through unchanged");
            line.to_string()
        }
    }
}

/// Compact multiple JSONL lines, dropping blank ones.
pub fn compact_jsonl(content: &str) -> String {
    content
        .lines()
        .map(compact_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
