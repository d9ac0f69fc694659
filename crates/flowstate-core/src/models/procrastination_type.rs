use serde::{Deserialize, Serialize};
use std::fmt;

/// Root-cause category of a procrastination episode.
///
/// Variants are declared in decision priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcrastinationType {
    #[serde(rename = "professional_referral")]
    ProfessionalReferralNeeded,
    Systemic,
    Rational,
    Individual,
}

impl ProcrastinationType {
    /// All types in decision priority order.
    pub const ALL: [ProcrastinationType; 4] = [
        Self::ProfessionalReferralNeeded,
        Self::Systemic,
        Self::Rational,
        Self::Individual,
    ];

    /// Fixed confidence reported for a verdict of this type.
    pub fn confidence(self) -> f64 {
        match self {
            Self::ProfessionalReferralNeeded => 0.9,
            Self::Systemic => 0.8,
            Self::Rational => 0.7,
            Self::Individual => 0.6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProfessionalReferralNeeded => "professional_referral",
            Self::Systemic => "systemic",
            Self::Rational => "rational",
            Self::Individual => "individual",
        }
    }
}

impl fmt::Display for ProcrastinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
