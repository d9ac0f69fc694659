use crate::models::{ProcrastinationAnalysis, UserPatterns};

/// Trailing-window store of past verdicts per user.
pub trait IPatternTracker: Send + Sync {
    /// Record a verdict and drop episodes that fell out of the window.
    fn record_procrastination_episode(
        &self,
        user_id: &str,
        task_id: &str,
        analysis: &ProcrastinationAnalysis,
    );

    /// Aggregate view for self-reflection. Unknown users get the zero-state.
    fn get_user_patterns(&self, user_id: &str) -> UserPatterns;
}
