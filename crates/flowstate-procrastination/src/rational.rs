//! Avoidance as a defensible cost-benefit decision.

use flowstate_core::config::RationalConfig;
use flowstate_core::models::{TaskContext, UserContext};

pub const LOW_MEANING_REASON: &str = "Task has low personal meaning or value alignment";
pub const SKILL_GAP_REASON: &str = "Task requires skills not yet developed";
pub const LOW_SUCCESS_REASON: &str =
    "Low probability of successful completion given current conditions";
pub const BETTER_ALTERNATIVES_REASON: &str =
    "Other tasks may provide better return on time investment";

const RATIONAL_RECOMMENDATION: &str = "Consider task elimination, delegation, or modification";

/// Outcome of the rational-avoidance check.
#[derive(Debug, Clone, PartialEq)]
pub struct RationalAssessment {
    pub is_rational: bool,
    /// Every reason that fired, in rule order.
    pub reasons: Vec<String>,
    pub recommendation: Option<String>,
}

/// Decides whether avoiding a task is rationally justified.
///
/// A single reason is ordinary reluctance; `min_reasons` independent reasons
/// (two by default) are required before avoidance is labelled rational.
#[derive(Debug, Clone, Default)]
pub struct RationalAvoidanceAssessor {
    config: RationalConfig,
}

impl RationalAvoidanceAssessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RationalConfig) -> Self {
        Self { config }
    }

    pub fn assess_rational_avoidance(
        &self,
        task: &TaskContext,
        _user: &UserContext,
    ) -> RationalAssessment {
        let mut reasons = Vec::new();

        if task.personal_meaningfulness < self.config.meaningfulness_threshold {
            reasons.push(LOW_MEANING_REASON.to_string());
        }

        if task.skill_match < self.config.skill_mismatch_threshold {
            reasons.push(SKILL_GAP_REASON.to_string());
        }

        if success_probability(task) < self.config.success_probability_threshold {
            reasons.push(LOW_SUCCESS_REASON.to_string());
        }

        if let Some(priority) = task.organizational_priority {
            if priority < self.config.low_priority_threshold {
                reasons.push(BETTER_ALTERNATIVES_REASON.to_string());
            }
        }

        let is_rational = reasons.len() >= self.config.min_reasons;
        RationalAssessment {
            is_rational,
            reasons,
            recommendation: is_rational.then(|| RATIONAL_RECOMMENDATION.to_string()),
        }
    }
}

/// Mean of clarity, resource availability and skill match.
pub fn success_probability(task: &TaskContext) -> f64 {
    (task.clarity_score + task.resource_availability + task.skill_match) / 3.0
}
