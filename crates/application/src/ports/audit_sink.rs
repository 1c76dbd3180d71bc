//! Audit log port

use std::future::Future;

use crate::ApplicationResult;

/// Port for recording resolution audit lines.
///
/// Receives the Change Reporter's `"<path>: resolved <literal>"` lines.
/// The lines are advisory; a sink failure must never block tool execution.
pub trait AuditSink: Send + Sync {
    /// Records a batch of audit lines for one tool call.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot accept the batch.
    fn record(&self, lines: Vec<String>) -> impl Future<Output = ApplicationResult<()>> + Send;
}
