//! Engine configuration.
//!
//! Every section is `#[serde(default)]`, so an empty TOML document yields the
//! documented thresholds and partial documents only override what they name.
//!
//! ```
//! use flowstate_core::config::FlowStateConfig;
//!
//! let config = FlowStateConfig::from_toml("[patterns]\nwindow_days = 14\n").unwrap();
//! assert_eq!(config.patterns.window_days, 14);
//! assert!((config.systemic.clarity_threshold - 0.3).abs() < f64::EPSILON);
//! ```

pub mod addressable_config;
pub mod defaults;
pub mod observability_config;
pub mod pattern_config;
pub mod rational_config;
pub mod referral_config;
pub mod systemic_config;

pub use addressable_config::AddressableConfig;
pub use observability_config::ObservabilityConfig;
pub use pattern_config::PatternConfig;
pub use rational_config::RationalConfig;
pub use referral_config::ReferralConfig;
pub use systemic_config::SystemicConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{FlowStateError, FlowStateResult};

/// Top-level configuration for every FlowState subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowStateConfig {
    pub systemic: SystemicConfig,
    pub rational: RationalConfig,
    pub referral: ReferralConfig,
    pub addressable: AddressableConfig,
    pub patterns: PatternConfig,
    pub observability: ObservabilityConfig,
}

impl FlowStateConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(input: &str) -> FlowStateResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal invariants of the configured thresholds.
    pub fn validate(&self) -> FlowStateResult<()> {
        let ratios = [
            ("systemic.clarity_threshold", self.systemic.clarity_threshold),
            ("systemic.resource_threshold", self.systemic.resource_threshold),
            (
                "systemic.systemic_score_threshold",
                self.systemic.systemic_score_threshold,
            ),
            (
                "rational.meaningfulness_threshold",
                self.rational.meaningfulness_threshold,
            ),
            (
                "rational.skill_mismatch_threshold",
                self.rational.skill_mismatch_threshold,
            ),
            (
                "rational.success_probability_threshold",
                self.rational.success_probability_threshold,
            ),
            (
                "rational.low_priority_threshold",
                self.rational.low_priority_threshold,
            ),
            (
                "addressable.learnable_skill_min",
                self.addressable.learnable_skill_min,
            ),
            (
                "addressable.learnable_skill_max",
                self.addressable.learnable_skill_max,
            ),
            (
                "addressable.low_energy_threshold",
                self.addressable.low_energy_threshold,
            ),
            (
                "addressable.clarification_threshold",
                self.addressable.clarification_threshold,
            ),
            (
                "addressable.alternative_approach_threshold",
                self.addressable.alternative_approach_threshold,
            ),
            (
                "referral.perfectionism_stress_threshold",
                self.referral.perfectionism_stress_threshold,
            ),
            (
                "referral.overwhelm_stress_threshold",
                self.referral.overwhelm_stress_threshold,
            ),
            (
                "referral.overwhelm_energy_threshold",
                self.referral.overwhelm_energy_threshold,
            ),
            (
                "patterns.systemic_insight_ratio",
                self.patterns.systemic_insight_ratio,
            ),
            (
                "patterns.rational_insight_ratio",
                self.patterns.rational_insight_ratio,
            ),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(FlowStateError::ConfigError(format!(
                    "{name} must lie in [0, 1], got {value}"
                )));
            }
        }

        if self.systemic.deadline_buffer_multiplier <= 0.0 {
            return Err(FlowStateError::ConfigError(format!(
                "systemic.deadline_buffer_multiplier must be positive, got {}",
                self.systemic.deadline_buffer_multiplier
            )));
        }
        if self.rational.min_reasons == 0 {
            return Err(FlowStateError::ConfigError(
                "rational.min_reasons must be at least 1".into(),
            ));
        }
        if self.addressable.learnable_skill_min > self.addressable.learnable_skill_max {
            return Err(FlowStateError::ConfigError(format!(
                "addressable learnable skill range is empty: [{}, {}]",
                self.addressable.learnable_skill_min, self.addressable.learnable_skill_max
            )));
        }
        if !(1..=defaults::MAX_PATTERN_WINDOW_DAYS).contains(&self.patterns.window_days) {
            return Err(FlowStateError::ConfigError(format!(
                "patterns.window_days must lie in [1, {}], got {}",
                defaults::MAX_PATTERN_WINDOW_DAYS,
                self.patterns.window_days
            )));
        }
        if !(0..=defaults::MAX_CHUNKING_THRESHOLD_MINUTES)
            .contains(&self.addressable.chunking_threshold_minutes)
        {
            return Err(FlowStateError::ConfigError(format!(
                "addressable.chunking_threshold_minutes must lie in [0, {}], got {}",
                defaults::MAX_CHUNKING_THRESHOLD_MINUTES,
                self.addressable.chunking_threshold_minutes
            )));
        }
        Ok(())
    }
}
