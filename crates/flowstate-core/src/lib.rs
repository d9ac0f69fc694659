//! # flowstate-core
//!
//! Foundation crate for the FlowState procrastination engine.
//! Defines the context records, the analysis value object, errors, config,
//! validation and the traits the rest of the host application talks to.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod validation;

// Re-export the most commonly used types at the crate root.
pub use config::FlowStateConfig;
pub use errors::{FlowStateError, FlowStateResult};
pub use models::{
    ProcrastinationAnalysis, ProcrastinationType, ReferralReason, SystemicCause, TaskContext,
    UserContext, UserPatterns,
};
