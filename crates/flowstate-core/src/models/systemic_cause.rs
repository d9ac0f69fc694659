use serde::{Deserialize, Serialize};
use std::fmt;

/// Organizational or environmental cause of avoidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemicCause {
    UnclearRequirements,
    UnrealisticDeadlines,
    ResourceShortage,
    ConflictingPriorities,
    /// Part of the vocabulary for callers; the detector never emits it.
    OrganizationalDysfunction,
}

impl SystemicCause {
    /// Contribution of this cause to the composite systemic score, in basis points.
    ///
    /// Integer weights keep sums such as 0.30 + 0.25 + 0.15 exactly at the
    /// 0.70 boundary instead of drifting above it.
    pub fn weight_bps(self) -> u32 {
        match self {
            Self::UnclearRequirements => 3_000,
            Self::UnrealisticDeadlines => 3_000,
            Self::ResourceShortage => 2_500,
            Self::ConflictingPriorities => 1_500,
            Self::OrganizationalDysfunction => 1_000,
        }
    }

    /// Contribution of this cause to the composite systemic score.
    pub fn weight(self) -> f64 {
        f64::from(self.weight_bps()) / 10_000.0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnclearRequirements => "unclear_requirements",
            Self::UnrealisticDeadlines => "unrealistic_deadlines",
            Self::ResourceShortage => "resource_shortage",
            Self::ConflictingPriorities => "conflicting_priorities",
            Self::OrganizationalDysfunction => "organizational_dysfunction",
        }
    }
}

impl fmt::Display for SystemicCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
