use serde::{Deserialize, Serialize};

use super::defaults;

/// Rational-avoidance assessor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RationalConfig {
    pub meaningfulness_threshold: f64,
    pub skill_mismatch_threshold: f64,
    /// Mean of clarity, resources and skill match below this is a low success probability.
    pub success_probability_threshold: f64,
    /// Organizational priority below this means better alternatives exist.
    pub low_priority_threshold: f64,
    /// Independent reasons required before avoidance counts as rational.
    pub min_reasons: usize,
}

impl Default for RationalConfig {
    fn default() -> Self {
        Self {
            meaningfulness_threshold: defaults::DEFAULT_MEANINGFULNESS_THRESHOLD,
            skill_mismatch_threshold: defaults::DEFAULT_SKILL_MISMATCH_THRESHOLD,
            success_probability_threshold: defaults::DEFAULT_SUCCESS_PROBABILITY_THRESHOLD,
            low_priority_threshold: defaults::DEFAULT_LOW_PRIORITY_THRESHOLD,
            min_reasons: defaults::DEFAULT_MIN_RATIONAL_REASONS,
        }
    }
}
