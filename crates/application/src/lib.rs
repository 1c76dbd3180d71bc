//! Synapse Application - reference resolution pipeline
//!
//! Expands `{{...}}` working-memory references inside JSON-shaped tool-call
//! parameters against a read-only context snapshot, and recovers an audit
//! trail of what was resolved where. Tool execution, orchestration, and
//! persistence live behind ports; this crate never performs I/O.

pub mod error;
pub mod ports;
pub mod reference_resolver;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use reference_resolver::{
    ReferenceKind, ReferenceMatch, ReferenceResolver, has_reference, parse_references,
    summarize_resolution,
};
pub use use_cases::{PrepareToolCall, PreparedToolCall};
