use serde::{Deserialize, Serialize};

use super::defaults;

/// Systemic-cause detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemicConfig {
    /// Clarity below this means requirements are unclear.
    pub clarity_threshold: f64,
    /// Resource availability below this means a resource shortage.
    pub resource_threshold: f64,
    /// Time to deadline must be at least this multiple of the estimate.
    pub deadline_buffer_multiplier: f64,
    /// More competing tasks than this means conflicting priorities.
    pub max_competing_tasks: usize,
    /// Systemic score above this makes the verdict systemic.
    pub systemic_score_threshold: f64,
}

impl Default for SystemicConfig {
    fn default() -> Self {
        Self {
            clarity_threshold: defaults::DEFAULT_CLARITY_THRESHOLD,
            resource_threshold: defaults::DEFAULT_RESOURCE_THRESHOLD,
            deadline_buffer_multiplier: defaults::DEFAULT_DEADLINE_BUFFER_MULTIPLIER,
            max_competing_tasks: defaults::DEFAULT_MAX_COMPETING_TASKS,
            systemic_score_threshold: defaults::DEFAULT_SYSTEMIC_SCORE_THRESHOLD,
        }
    }
}
