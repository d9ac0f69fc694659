mod analysis;
pub mod duration_secs;
mod procrastination_type;
mod referral_reason;
mod systemic_cause;
mod task_context;
mod user_context;
mod user_patterns;

pub use analysis::ProcrastinationAnalysis;
pub use procrastination_type::ProcrastinationType;
pub use referral_reason::ReferralReason;
pub use systemic_cause::SystemicCause;
pub use task_context::TaskContext;
pub use user_context::UserContext;
pub use user_patterns::UserPatterns;
