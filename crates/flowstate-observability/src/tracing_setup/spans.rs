//! Span definitions per operation: analysis and pattern tracking.

/// Create an analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($task_id:expr, $user_id:expr) => {
        $crate::tracing::info_span!("flowstate.analysis", task_id = %$task_id, user_id = %$user_id)
    };
}

/// Create a pattern-tracking span.
#[macro_export]
macro_rules! pattern_span {
    ($user_id:expr) => {
        $crate::tracing::info_span!("flowstate.patterns", user_id = %$user_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYSIS: &str = "flowstate.analysis";
    pub const PATTERNS: &str = "flowstate.patterns";
}
