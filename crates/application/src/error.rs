//! Application error types

use synapse_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
///
/// Resolution itself is total and never fails: unresolved references
/// degrade to inline `[... not found]` markers in the output. These
/// variants cover the surfaces around resolution instead.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A parameter tree nests deeper than the supported limit.
    #[error("parameter tree exceeds maximum depth of {0}")]
    DepthExceeded(usize),

    /// A tool invocation failed in the executor.
    #[error("tool error: {0}")]
    Tool(String),

    /// The audit sink rejected a batch of lines.
    #[error("audit sink error: {0}")]
    AuditSink(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
