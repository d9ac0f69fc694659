//! Professional referral suggestions.
//!
//! Checked before every other assessor. A referral is a suggestion to talk to
//! a licensed professional; the engine never diagnoses.

use flowstate_core::config::ReferralConfig;
use flowstate_core::models::{ReferralReason, TaskContext, UserContext};
use flowstate_observability::tracing_setup::events;

/// Determines when professional support should be suggested.
#[derive(Debug, Clone, Default)]
pub struct ProfessionalReferralAssessor {
    config: ReferralConfig,
}

impl ProfessionalReferralAssessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReferralConfig) -> Self {
        Self { config }
    }

    /// Return the first matching referral reason, in fixed priority order.
    pub fn assess_referral_need(
        &self,
        user: &UserContext,
        _task: &TaskContext,
    ) -> Option<ReferralReason> {
        let reason = self.first_matching_reason(user)?;
        events::referral_indicator_detected(&user.user_id, reason);
        Some(reason)
    }

    fn first_matching_reason(&self, user: &UserContext) -> Option<ReferralReason> {
        let cfg = &self.config;

        if user.anxiety_indicators >= cfg.anxiety_threshold {
            return Some(ReferralReason::PersistentAnxiety);
        }
        if user.depression_indicators >= cfg.depression_threshold {
            return Some(ReferralReason::DepressionIndicators);
        }
        if user.attention_difficulties >= cfg.attention_threshold {
            return Some(ReferralReason::AttentionDifficulties);
        }
        if user.reports_perfectionism()
            && user.current_stress_level > cfg.perfectionism_stress_threshold
        {
            return Some(ReferralReason::PerfectionismParalysis);
        }
        if user.current_stress_level > cfg.overwhelm_stress_threshold
            && user.energy_level < cfg.overwhelm_energy_threshold
            && user.recent_procrastination_patterns.len() > cfg.overwhelm_pattern_count
        {
            return Some(ReferralReason::ChronicOverwhelm);
        }
        None
    }
}
