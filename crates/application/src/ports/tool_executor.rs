//! Tool execution port

use std::future::Future;

use serde_json::Value;

use crate::ApplicationResult;

/// Port for executing a tool with fully resolved parameters.
///
/// The resolver never calls this itself; the orchestration loop resolves a
/// tool call's parameters first, then hands them to an implementation of
/// this port.
pub trait ToolExecutor: Send + Sync {
    /// Executes the named tool and returns its raw result value.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool is unknown or the invocation fails.
    fn execute(
        &self,
        tool: &str,
        params: Value,
    ) -> impl Future<Output = ApplicationResult<Value>> + Send;
}
