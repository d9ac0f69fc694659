mod flowstate_error;

pub use flowstate_error::FlowStateError;

/// Result alias used across every FlowState crate.
pub type FlowStateResult<T> = Result<T, FlowStateError>;
