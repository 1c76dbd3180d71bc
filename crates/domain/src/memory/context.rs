//! Resolution context snapshot
//!
//! The read-only view of all four memory stores passed into one resolution
//! call. The resolver never mutates it and never retains it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::artifact::Artifact;
use super::attribute::AttributeRecord;
use super::entry::MemoryEntry;
use crate::error::{DomainError, DomainResult};

/// Snapshot of the agent's working memory at resolution time.
///
/// Owned by the caller; the resolver only reads it. Sequences preserve the
/// caller's order, attribute names are looked up verbatim (case-sensitive,
/// no normalization), and nothing is sorted or deduped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionContext {
    /// The agent's current free-text working notes.
    #[serde(default)]
    pub scratchpad: String,

    /// The append-only memory log, in chronological order.
    #[serde(default)]
    pub blackboard: Vec<MemoryEntry>,

    /// Saved tool results, keyed by the verbatim attribute name.
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeRecord>,

    /// Artifacts produced so far, in creation order.
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl ResolutionContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scratchpad.
    #[must_use]
    pub fn with_scratchpad(mut self, scratchpad: impl Into<String>) -> Self {
        self.scratchpad = scratchpad.into();
        self
    }

    /// Sets the memory log.
    #[must_use]
    pub fn with_blackboard(mut self, blackboard: Vec<MemoryEntry>) -> Self {
        self.blackboard = blackboard;
        self
    }

    /// Sets the artifact sequence.
    #[must_use]
    pub fn with_artifacts(mut self, artifacts: Vec<Artifact>) -> Self {
        self.artifacts = artifacts;
        self
    }

    /// Appends an entry to the memory log.
    pub fn push_entry(&mut self, entry: MemoryEntry) {
        self.blackboard.push(entry);
    }

    /// Appends an artifact.
    pub fn push_artifact(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    /// Saves an attribute under its own name.
    ///
    /// # Errors
    ///
    /// Returns an error if the record's name is empty.
    pub fn insert_attribute(&mut self, record: AttributeRecord) -> DomainResult<()> {
        if record.name.is_empty() {
            return Err(DomainError::InvalidAttributeName(record.name));
        }
        self.attributes.insert(record.name.clone(), record);
        Ok(())
    }

    /// Looks up an attribute by its verbatim, case-sensitive name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeRecord> {
        self.attributes.get(name)
    }

    /// Looks up an artifact by `id`, falling back to exact `title` match.
    ///
    /// The id scan runs over the whole sequence before the title scan, and
    /// the first match wins if duplicates exist.
    #[must_use]
    pub fn artifact(&self, key: &str) -> Option<&Artifact> {
        self.artifacts
            .iter()
            .find(|a| a.id == key)
            .or_else(|| self.artifacts.iter().find(|a| a.title == key))
    }

    /// Returns true if all four stores are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scratchpad.is_empty()
            && self.blackboard.is_empty()
            && self.attributes.is_empty()
            && self.artifacts.is_empty()
    }
}
