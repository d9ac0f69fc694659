use serde::{Deserialize, Serialize};

use crate::constants::PERFECTIONISM_PATTERN;

/// Caller-supplied, self-reported state of the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: String,
    pub current_stress_level: f64,
    pub energy_level: f64,
    /// Pattern tags, in the order given.
    #[serde(default)]
    pub recent_procrastination_patterns: Vec<String>,
    #[serde(default)]
    pub support_systems: Vec<String>,
    #[serde(default)]
    pub previous_successful_strategies: Vec<String>,
    /// Frequency counts on the 0–10 observation scale.
    pub anxiety_indicators: u32,
    pub depression_indicators: u32,
    pub attention_difficulties: u32,
}

impl UserContext {
    /// Whether "perfectionism" appears among the recent pattern tags.
    pub fn reports_perfectionism(&self) -> bool {
        self.recent_procrastination_patterns
            .iter()
            .any(|p| p == PERFECTIONISM_PATTERN)
    }
}
