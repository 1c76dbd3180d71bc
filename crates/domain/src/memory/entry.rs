//! Memory log entries

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;
use crate::id::generate_id;

/// Category of a memory log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryCategory {
    /// Something the agent noticed.
    Observation,
    /// A conclusion the agent drew.
    Insight,
    /// An open question to resolve later.
    Question,
    /// A decision that was made.
    Decision,
    /// A planned course of action.
    Plan,
    /// A note that an artifact was produced.
    Artifact,
    /// A failure the agent recorded.
    Error,
    /// Input injected by the user mid-session.
    UserInterjection,
}

impl MemoryCategory {
    /// Returns the uppercase label used in formatted memory logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Observation => "OBSERVATION",
            Self::Insight => "INSIGHT",
            Self::Question => "QUESTION",
            Self::Decision => "DECISION",
            Self::Plan => "PLAN",
            Self::Artifact => "ARTIFACT",
            Self::Error => "ERROR",
            Self::UserInterjection => "USER_INTERJECTION",
        }
    }
}

impl fmt::Display for MemoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MemoryCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "observation" => Ok(Self::Observation),
            "insight" => Ok(Self::Insight),
            "question" => Ok(Self::Question),
            "decision" => Ok(Self::Decision),
            "plan" => Ok(Self::Plan),
            "artifact" => Ok(Self::Artifact),
            "error" => Ok(Self::Error),
            "user_interjection" => Ok(Self::UserInterjection),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

/// A single entry in the agent's append-only memory log.
///
/// Entries are immutable once appended; the log's insertion order is
/// chronological and significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryEntry {
    /// Unique entry id.
    pub id: String,
    /// When the entry was recorded.
    pub timestamp: DateTime<Utc>,
    /// Entry category.
    pub category: MemoryCategory,
    /// Free-text content.
    pub content: String,
    /// Agent iteration that produced the entry.
    pub iteration: u32,
    /// Optional structured payload attached by the producing tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl MemoryEntry {
    /// Creates a new entry with a fresh id and the current timestamp.
    #[must_use]
    pub fn new(category: MemoryCategory, content: impl Into<String>, iteration: u32) -> Self {
        Self {
            id: generate_id(),
            timestamp: Utc::now(),
            category,
            content: content.into(),
            iteration,
            data: None,
        }
    }

    /// Attaches a structured payload.
    #[must_use]
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }
}
