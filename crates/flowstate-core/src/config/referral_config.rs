use serde::{Deserialize, Serialize};

use super::defaults;

/// Professional-referral assessor configuration.
///
/// Indicator thresholds are inclusive (`>=`), level thresholds are strict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferralConfig {
    pub anxiety_threshold: u32,
    pub depression_threshold: u32,
    pub attention_threshold: u32,
    pub perfectionism_stress_threshold: f64,
    pub overwhelm_stress_threshold: f64,
    pub overwhelm_energy_threshold: f64,
    /// More recent patterns than this contributes to chronic overwhelm.
    pub overwhelm_pattern_count: usize,
}

impl Default for ReferralConfig {
    fn default() -> Self {
        Self {
            anxiety_threshold: defaults::DEFAULT_ANXIETY_THRESHOLD,
            depression_threshold: defaults::DEFAULT_DEPRESSION_THRESHOLD,
            attention_threshold: defaults::DEFAULT_ATTENTION_THRESHOLD,
            perfectionism_stress_threshold: defaults::DEFAULT_PERFECTIONISM_STRESS_THRESHOLD,
            overwhelm_stress_threshold: defaults::DEFAULT_OVERWHELM_STRESS_THRESHOLD,
            overwhelm_energy_threshold: defaults::DEFAULT_OVERWHELM_ENERGY_THRESHOLD,
            overwhelm_pattern_count: defaults::DEFAULT_OVERWHELM_PATTERN_COUNT,
        }
    }
}
