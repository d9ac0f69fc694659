use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Caller-supplied description of the task being avoided.
///
/// All scores are expected in [0.0, 1.0]; see [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskContext {
    pub task_id: String,
    pub description: String,
    pub deadline: Option<DateTime<Utc>>,
    /// Serialized as whole seconds.
    #[serde(default, with = "super::duration_secs")]
    pub estimated_duration: Option<Duration>,
    /// How well-specified the requirements are.
    pub clarity_score: f64,
    pub resource_availability: f64,
    pub personal_meaningfulness: f64,
    /// Alignment between required and possessed skills.
    pub skill_match: f64,
    /// Ids of other tasks contending for the same time.
    #[serde(default)]
    pub competing_tasks: Vec<String>,
    /// Organization-stated importance.
    pub organizational_priority: Option<f64>,
}

impl TaskContext {
    /// Time left until the deadline, negative when it has passed.
    pub fn time_to_deadline(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.deadline.map(|deadline| deadline - now)
    }
}
