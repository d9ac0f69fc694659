//! Factors within the individual's own control.

use chrono::Duration;
use flowstate_core::config::AddressableConfig;
use flowstate_core::models::{TaskContext, UserContext};

pub const SKILL_DEVELOPMENT: &str = "Skill development: This task could help build capabilities";
pub const ENERGY_MANAGEMENT: &str =
    "Energy management: Consider optimal timing for this type of work";
pub const TASK_CHUNKING: &str = "Task chunking: Break into smaller, manageable pieces";
pub const CLARIFICATION_SEEKING: &str = "Clarification seeking: Ask for clearer requirements";
pub const ALTERNATIVE_APPROACHES: &str =
    "Alternative approaches: Find different ways to accomplish goal";

/// Finds factors the user can act on.
#[derive(Debug, Clone, Default)]
pub struct AddressableFactorIdentifier {
    config: AddressableConfig,
}

impl AddressableFactorIdentifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AddressableConfig) -> Self {
        Self { config }
    }

    /// Independently evaluated; output order follows rule order.
    pub fn identify_addressable_factors(
        &self,
        task: &TaskContext,
        user: &UserContext,
    ) -> Vec<String> {
        let cfg = &self.config;
        let mut factors = Vec::new();

        // Learnable gap, both bounds inclusive.
        if (cfg.learnable_skill_min..=cfg.learnable_skill_max).contains(&task.skill_match) {
            factors.push(SKILL_DEVELOPMENT.to_string());
        }

        if user.energy_level < cfg.low_energy_threshold {
            factors.push(ENERGY_MANAGEMENT.to_string());
        }

        // A threshold too large for a Duration can never be exceeded.
        let chunking_threshold = Duration::try_minutes(cfg.chunking_threshold_minutes);
        if let (Some(estimate), Some(threshold)) = (task.estimated_duration, chunking_threshold) {
            if estimate > threshold {
                factors.push(TASK_CHUNKING.to_string());
            }
        }

        if task.clarity_score < cfg.clarification_threshold && !user.support_systems.is_empty() {
            factors.push(CLARIFICATION_SEEKING.to_string());
        }

        if task.skill_match < cfg.alternative_approach_threshold {
            factors.push(ALTERNATIVE_APPROACHES.to_string());
        }

        factors
    }
}
