//! Store formatters
//!
//! Render the memory stores into the text each reference form substitutes.
//! The bulk views are deliberately partial: `{{attributes}}` omits `params`
//! and `resultString`, and `{{artifacts}}` carries only the identifying
//! fields plus content.

use serde_json::{Map, Value, json};
use synapse_domain::{Artifact, AttributeRecord, MemoryEntry, ResolutionContext};

/// Formats the memory log, one `[CATEGORY] (Iteration N): content` block
/// per entry, blank-line separated. Empty logs render a visible literal
/// rather than an empty string.
#[must_use]
pub fn format_blackboard(entries: &[MemoryEntry]) -> String {
    if entries.is_empty() {
        return "[No blackboard entries]".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            format!(
                "[{}] (Iteration {}): {}",
                entry.category, entry.iteration, entry.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Formats every attribute as a pretty-printed JSON object keyed by name.
/// Renders `{}` when no attributes exist.
#[must_use]
pub fn format_attribute_map(context: &ResolutionContext) -> String {
    let mut map = Map::new();
    for (name, record) in &context.attributes {
        map.insert(
            name.clone(),
            json!({
                "tool": record.tool,
                "size": record.size,
                "createdAt": record.created_at,
                "iteration": record.iteration,
                "result": record.result,
            }),
        );
    }
    to_pretty(&Value::Object(map))
}

/// Renders one attribute's result: string results verbatim, anything else
/// pretty-printed JSON.
#[must_use]
pub fn format_attribute_result(record: &AttributeRecord) -> String {
    match &record.result {
        Value::String(s) => s.clone(),
        other => to_pretty(other),
    }
}

/// Formats every artifact as a pretty-printed JSON array, in the
/// sequence's original order. Renders `[]` when no artifacts exist.
#[must_use]
pub fn format_artifact_list(artifacts: &[Artifact]) -> String {
    let items: Vec<Value> = artifacts
        .iter()
        .map(|artifact| {
            json!({
                "id": artifact.id,
                "type": artifact.kind,
                "title": artifact.title,
                "content": artifact.content,
                "description": artifact.description,
            })
        })
        .collect();
    to_pretty(&Value::Array(items))
}

/// Marker substituted for an attribute reference that cannot be resolved.
#[must_use]
pub fn attribute_not_found(name: &str) -> String {
    format!("[Attribute '{name}' not found]")
}

/// Marker substituted for an artifact reference that cannot be resolved.
#[must_use]
pub fn artifact_not_found(key: &str) -> String {
    format!("[Artifact '{key}' not found]")
}

fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
