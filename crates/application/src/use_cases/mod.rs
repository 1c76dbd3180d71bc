//! Application use cases

mod prepare_tool_call;

pub use prepare_tool_call::{PrepareToolCall, PreparedToolCall};
