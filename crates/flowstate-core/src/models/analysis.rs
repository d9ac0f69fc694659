use serde::{Deserialize, Serialize};

use super::{ProcrastinationType, ReferralReason, SystemicCause};

/// Verdict for one procrastination episode.
///
/// Only the factor list matching `primary_type` is ever populated, and
/// `referral_reason` is set only for referral verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcrastinationAnalysis {
    pub primary_type: ProcrastinationType,
    pub confidence: f64,
    pub systemic_factors: Vec<SystemicCause>,
    pub rational_factors: Vec<String>,
    pub addressable_factors: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub referral_reason: Option<ReferralReason>,
    /// Plain-language explanation for the user.
    pub user_explanation: String,
}

impl ProcrastinationAnalysis {
    pub fn is_referral(&self) -> bool {
        self.primary_type == ProcrastinationType::ProfessionalReferralNeeded
    }

    /// Number of factor lists that carry entries. Never more than one.
    pub fn populated_factor_lists(&self) -> usize {
        [
            !self.systemic_factors.is_empty(),
            !self.rational_factors.is_empty(),
            !self.addressable_factors.is_empty(),
        ]
        .into_iter()
        .filter(|populated| *populated)
        .count()
    }
}
