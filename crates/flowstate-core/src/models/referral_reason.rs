use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern of self-reported indicators suggesting that talking to a licensed
/// professional may help. This is a suggestion, never a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferralReason {
    PersistentAnxiety,
    DepressionIndicators,
    AttentionDifficulties,
    PerfectionismParalysis,
    ChronicOverwhelm,
}

impl ReferralReason {
    /// Plain-language next step shown with a referral suggestion.
    pub fn guidance(self) -> &'static str {
        match self {
            Self::PersistentAnxiety => {
                "Consider speaking with a counselor or therapist about anxiety management techniques"
            }
            Self::DepressionIndicators => {
                "A mental health professional could help address underlying mood concerns"
            }
            Self::AttentionDifficulties => {
                "Consider an evaluation for ADHD or other attention-related conditions"
            }
            Self::PerfectionismParalysis => {
                "A therapist specializing in perfectionism could provide helpful strategies"
            }
            Self::ChronicOverwhelm => {
                "Professional support could help develop better stress management strategies"
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersistentAnxiety => "persistent_anxiety",
            Self::DepressionIndicators => "depression_indicators",
            Self::AttentionDifficulties => "attention_difficulties",
            Self::PerfectionismParalysis => "perfectionism_paralysis",
            Self::ChronicOverwhelm => "chronic_overwhelm",
        }
    }
}

impl fmt::Display for ReferralReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
