//! Synapse Domain - Core working-memory types
//!
//! This crate defines the domain model for the Synapse reference resolver:
//! the agent's four memory stores, the read-only snapshot passed into each
//! resolution call, and the data shapes shared with the sibling prompt
//! builder. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod id;
pub mod memory;
pub mod prompt;

pub use error::{DomainError, DomainResult};
pub use id::generate_id;
pub use memory::{
    Artifact, ArtifactKind, AttributeRecord, MemoryCategory, MemoryEntry, ResolutionContext,
};
pub use prompt::{PromptOverride, PromptPayload, PromptSection, ToolDefinition};
