//! Ports to external collaborators
//!
//! The resolver's collaborators (tool execution, log sinks) are outside
//! this component; only their interfaces live here. Implementations belong
//! to the surrounding orchestration layer.

mod audit_sink;
mod tool_executor;

pub use audit_sink::AuditSink;
pub use tool_executor::ToolExecutor;
