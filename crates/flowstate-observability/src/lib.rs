//! # flowstate-observability
//!
//! Structured tracing for the FlowState engine: subscriber setup, span
//! definitions per operation, and structured event functions.
//!
//! Events never carry raw indicator counts or free-text task descriptions;
//! they carry ids, tags, and verdicts only.

pub mod tracing_setup;

#[doc(hidden)]
pub use tracing;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
