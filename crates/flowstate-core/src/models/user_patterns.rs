use serde::{Deserialize, Serialize};

use super::ProcrastinationType;

/// Aggregate view of a user's recent episodes, for self-reflection.
///
/// `Default` is the zero-state returned for users with no recorded episodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatterns {
    pub total_episodes: usize,
    /// Types seen in the window, most frequent first.
    pub common_types: Vec<ProcrastinationType>,
    /// Count per type, in the same order as `common_types`.
    pub type_counts: Vec<(ProcrastinationType, usize)>,
    pub insights: Vec<String>,
}

impl UserPatterns {
    pub fn is_empty(&self) -> bool {
        self.total_episodes == 0
    }
}
