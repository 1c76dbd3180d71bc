//! Reference resolution module
//!
//! Parsing and resolution of `{{...}}` working-memory references in
//! JSON-shaped tool parameters.
//!
//! # Usage
//!
//! ```
//! use synapse_application::reference_resolver::ReferenceResolver;
//! use synapse_domain::ResolutionContext;
//!
//! let ctx = ResolutionContext::new().with_scratchpad("comparing flight prices");
//! let resolver = ReferenceResolver::new(ctx);
//!
//! let expanded = resolver.expand_str("Notes so far: {{scratchpad}}");
//! assert_eq!(expanded, "Notes so far: comparing flight prices");
//! ```

pub mod engine;
pub mod format;
pub mod parser;
pub mod report;

pub use engine::ReferenceResolver;
pub use parser::{ReferenceKind, ReferenceMatch, has_reference, parse_references};
pub use report::summarize_resolution;
