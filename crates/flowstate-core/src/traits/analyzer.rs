use crate::errors::FlowStateResult;
use crate::models::{ProcrastinationAnalysis, TaskContext, UserContext};

/// Root-cause classification of a single procrastination episode.
pub trait IProcrastinationAnalyzer: Send + Sync {
    /// Classify one episode. Fails before doing any work on malformed input.
    fn analyze_procrastination(
        &self,
        task: &TaskContext,
        user: &UserContext,
    ) -> FlowStateResult<ProcrastinationAnalysis>;
}
