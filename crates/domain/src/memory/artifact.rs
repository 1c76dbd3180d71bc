//! Titled agent outputs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::generate_id;

/// The kind of content an artifact carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Plain text
    #[default]
    Text,
    /// File contents
    File,
    /// Image data
    Image,
    /// Structured data
    Data,
}

impl ArtifactKind {
    /// Returns the lowercase wire label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::File => "file",
            Self::Image => "image",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "file" => Ok(Self::File),
            "image" => Ok(Self::Image),
            "data" => Ok(Self::Data),
            other => Err(DomainError::UnknownArtifactKind(other.to_string())),
        }
    }
}

/// A titled, content-bearing output produced by the agent.
///
/// Artifacts are referenced either by `id` or by exact `title`; the
/// artifact sequence preserves the order in which they were produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Unique artifact id.
    pub id: String,
    /// The kind of content.
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    /// Display title, also usable as a lookup key.
    pub title: String,
    /// The artifact's content.
    pub content: String,
    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional MIME type for file/image artifacts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Optional content size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// When the artifact was created.
    pub created_at: DateTime<Utc>,
    /// Agent iteration that produced it.
    pub iteration: u32,
}

impl Artifact {
    /// Creates a new artifact with a fresh id and the current timestamp.
    #[must_use]
    pub fn new(
        kind: ArtifactKind,
        title: impl Into<String>,
        content: impl Into<String>,
        iteration: u32,
    ) -> Self {
        Self {
            id: generate_id(),
            kind,
            title: title.into(),
            content: content.into(),
            description: None,
            mime_type: None,
            size: None,
            created_at: Utc::now(),
            iteration,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Sets the content size.
    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }
}
