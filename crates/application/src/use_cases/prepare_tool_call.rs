//! Prepare tool call use case

use serde_json::Value;
use synapse_domain::ResolutionContext;

use crate::error::{ApplicationError, ApplicationResult};
use crate::reference_resolver::{ReferenceResolver, has_reference, summarize_resolution};

/// Output of [`PrepareToolCall`]: the resolved parameter tree plus the
/// audit lines describing what was resolved where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedToolCall {
    /// The parameter tree with every reference expanded.
    pub params: Value,

    /// One `"<path>: resolved <literal>"` line per detected reference,
    /// for the caller's log sink.
    pub audit: Vec<String>,
}

/// Resolves working-memory references in a tool call's parameters before
/// the orchestration loop hands them to the executor.
///
/// Constructed once per tool call from a fresh context snapshot.
pub struct PrepareToolCall {
    resolver: ReferenceResolver,
}

impl PrepareToolCall {
    /// Creates the use case over a context snapshot.
    #[must_use]
    pub const fn new(context: ResolutionContext) -> Self {
        Self {
            resolver: ReferenceResolver::new(context),
        }
    }

    /// Creates with an empty context (for testing).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            resolver: ReferenceResolver::empty(),
        }
    }

    /// Returns a reference to the internal resolver.
    #[must_use]
    pub const fn resolver(&self) -> &ReferenceResolver {
        &self.resolver
    }

    /// Executes the use case, resolving every string leaf in the
    /// parameters and summarizing the changes.
    ///
    /// A top-level string with no recognized reference short-circuits
    /// without a tree walk or audit pass.
    #[must_use]
    pub fn execute(&self, params: &Value) -> PreparedToolCall {
        if params.is_string() && !has_reference(params) {
            return PreparedToolCall {
                params: params.clone(),
                audit: Vec::new(),
            };
        }

        let resolved = self.resolver.resolve(params);
        let audit = summarize_resolution(params, &resolved);

        PreparedToolCall {
            params: resolved,
            audit,
        }
    }

    /// Depth-checked variant of [`execute`](Self::execute).
    ///
    /// Rejects parameter trees nested deeper than `max_depth` up front,
    /// so a pathological input fails fast instead of recursing through
    /// the walker.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::DepthExceeded`] when the tree is too
    /// deep.
    pub fn try_execute(
        &self,
        params: &Value,
        max_depth: usize,
    ) -> ApplicationResult<PreparedToolCall> {
        if depth(params) > max_depth {
            return Err(ApplicationError::DepthExceeded(max_depth));
        }
        Ok(self.execute(params))
    }
}

impl Default for PrepareToolCall {
    fn default() -> Self {
        Self::empty()
    }
}

fn depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        Value::Object(entries) => 1 + entries.values().map(depth).max().unwrap_or(0),
        _ => 1,
    }
}
