//! Working-memory store types
//!
//! The four stores the agent accumulates during a session: the scratchpad,
//! the blackboard (memory log), saved attributes, and artifacts.

mod artifact;
mod attribute;
mod context;
mod entry;

pub use artifact::{Artifact, ArtifactKind};
pub use attribute::AttributeRecord;
pub use context::ResolutionContext;
pub use entry::{MemoryCategory, MemoryEntry};
