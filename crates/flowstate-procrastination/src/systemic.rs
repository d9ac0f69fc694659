//! Organizational and environmental causes of avoidance.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use flowstate_core::config::SystemicConfig;
use flowstate_core::models::{SystemicCause, TaskContext};
use flowstate_observability::tracing_setup::events;

/// Detects systemic causes in a task context and scores them.
#[derive(Debug, Clone, Default)]
pub struct SystemicCauseDetector {
    config: SystemicConfig,
}

impl SystemicCauseDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SystemicConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SystemicConfig {
        &self.config
    }

    /// Identify systemic causes. Every rule is evaluated independently.
    ///
    /// `now` anchors the deadline check so the result is reproducible.
    pub fn analyze_systemic_factors(
        &self,
        task: &TaskContext,
        now: DateTime<Utc>,
    ) -> BTreeSet<SystemicCause> {
        let mut factors = BTreeSet::new();

        if task.clarity_score < self.config.clarity_threshold {
            factors.insert(SystemicCause::UnclearRequirements);
        }

        if task.resource_availability < self.config.resource_threshold {
            factors.insert(SystemicCause::ResourceShortage);
        }

        if self.deadline_is_unrealistic(task, now) {
            factors.insert(SystemicCause::UnrealisticDeadlines);
        }

        // Every listed entry counts, repeated ids included.
        if task.competing_tasks.len() > self.config.max_competing_tasks {
            factors.insert(SystemicCause::ConflictingPriorities);
        }

        for cause in &factors {
            events::systemic_factor_detected(&task.task_id, *cause);
        }
        factors
    }

    /// Weighted sum of cause weights, clamped to 1.0. Empty input scores 0.0.
    pub fn calculate_systemic_score<'a>(
        &self,
        factors: impl IntoIterator<Item = &'a SystemicCause>,
    ) -> f64 {
        let total_bps: u32 = factors.into_iter().map(|cause| cause.weight_bps()).sum();
        f64::from(total_bps.min(10_000)) / 10_000.0
    }

    /// Whether the systemic score is high enough to make the verdict systemic.
    pub fn is_systemic(&self, score: f64) -> bool {
        score > self.config.systemic_score_threshold
    }

    // Less than `deadline_buffer_multiplier` × estimate left. A passed deadline counts.
    fn deadline_is_unrealistic(&self, task: &TaskContext, now: DateTime<Utc>) -> bool {
        let (Some(remaining), Some(estimate)) = (task.time_to_deadline(now), task.estimated_duration)
        else {
            return false;
        };
        let remaining_ms = remaining.num_milliseconds() as f64;
        let required_ms = estimate.num_milliseconds() as f64 * self.config.deadline_buffer_multiplier;
        remaining_ms < required_ms
    }
}
