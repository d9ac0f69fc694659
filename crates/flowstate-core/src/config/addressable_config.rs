use serde::{Deserialize, Serialize};

use super::defaults;

/// Addressable-factor identifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressableConfig {
    /// Inclusive lower bound of a learnable skill gap.
    pub learnable_skill_min: f64,
    /// Inclusive upper bound of a learnable skill gap.
    pub learnable_skill_max: f64,
    pub low_energy_threshold: f64,
    /// Estimates longer than this (minutes) should be chunked.
    pub chunking_threshold_minutes: i64,
    pub clarification_threshold: f64,
    pub alternative_approach_threshold: f64,
}

impl Default for AddressableConfig {
    fn default() -> Self {
        Self {
            learnable_skill_min: defaults::DEFAULT_LEARNABLE_SKILL_MIN,
            learnable_skill_max: defaults::DEFAULT_LEARNABLE_SKILL_MAX,
            low_energy_threshold: defaults::DEFAULT_LOW_ENERGY_THRESHOLD,
            chunking_threshold_minutes: defaults::DEFAULT_CHUNKING_THRESHOLD_MINUTES,
            clarification_threshold: defaults::DEFAULT_CLARIFICATION_THRESHOLD,
            alternative_approach_threshold: defaults::DEFAULT_ALTERNATIVE_APPROACH_THRESHOLD,
        }
    }
}
