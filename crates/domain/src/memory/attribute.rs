//! Saved tool results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::generate_id;

/// A named, saved result of a prior tool call.
///
/// Attributes are keyed by the verbatim name chosen by whoever saved them;
/// lookups are case-sensitive with no normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeRecord {
    /// Unique record id.
    pub id: String,
    /// The name the attribute was saved under.
    pub name: String,
    /// The tool that produced the result.
    pub tool: String,
    /// The parameters the tool was called with.
    #[serde(default)]
    pub params: Map<String, Value>,
    /// The raw result value.
    pub result: Value,
    /// The result rendered as text.
    pub result_string: String,
    /// Character count of the rendered result.
    pub size: usize,
    /// When the attribute was saved.
    pub created_at: DateTime<Utc>,
    /// Agent iteration that produced it.
    pub iteration: u32,
}

impl AttributeRecord {
    /// Creates a new record, rendering `result` to text and computing its
    /// character count.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tool: impl Into<String>,
        params: Map<String, Value>,
        result: Value,
        iteration: u32,
    ) -> Self {
        let result_string = match &result {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let size = result_string.chars().count();

        Self {
            id: generate_id(),
            name: name.into(),
            tool: tool.into(),
            params,
            result,
            result_string,
            size,
            created_at: Utc::now(),
            iteration,
        }
    }
}
