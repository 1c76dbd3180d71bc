//! Resolution audit reporting
//!
//! Recovers which references produced which changes by re-scanning the
//! original tree, independently of the substitutions actually performed.
//! Purely advisory: the summary feeds a log sink and never drives
//! resolution or any other control flow.

use serde_json::Value;

use super::parser::parse_references;

/// Walks the original and resolved trees in parallel and returns one
/// `"<path>: resolved <literal>"` line per reference detected in each
/// changed string leaf.
///
/// Paths are dotted/bracketed (`tool_calls[2].params.query`); a root-level
/// string reports as `$`. Within one leaf, duplicate literals collapse to
/// a single line, in order of first appearance. Structurally mismatched
/// subtrees (array on one side, object on the other) are skipped rather
/// than reported; this is a best-effort trail, never authoritative.
#[must_use]
pub fn summarize_resolution(original: &Value, resolved: &Value) -> Vec<String> {
    let mut lines = Vec::new();
    walk(original, resolved, "", &mut lines);
    lines
}

fn walk(original: &Value, resolved: &Value, path: &str, lines: &mut Vec<String>) {
    match (original, resolved) {
        (Value::String(before), Value::String(after)) => {
            if before != after {
                report_leaf(before, path, lines);
            }
        }
        (Value::Array(before), Value::Array(after)) => {
            for (index, (o, r)) in before.iter().zip(after).enumerate() {
                let child = format!("{path}[{index}]");
                walk(o, r, &child, lines);
            }
        }
        (Value::Object(before), Value::Object(after)) => {
            for (key, o) in before {
                if let Some(r) = after.get(key) {
                    let child = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    walk(o, r, &child, lines);
                }
            }
        }
        // Shape mismatch: skip the subtree.
        _ => {}
    }
}

fn report_leaf(original: &str, path: &str, lines: &mut Vec<String>) {
    let label = if path.is_empty() { "$" } else { path };
    let mut seen: Vec<String> = Vec::new();

    for reference in parse_references(original) {
        let literal = reference.kind.literal();
        if seen.contains(&literal) {
            continue;
        }
        lines.push(format!("{label}: resolved {literal}"));
        seen.push(literal);
    }
}
