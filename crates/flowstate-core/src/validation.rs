//! Input validation for caller-supplied context records.
//!
//! Out-of-range values are rejected, never clamped: clamping would silently
//! move an input across a decision threshold.

use crate::constants::{INDICATOR_SCALE_MAX, SCORE_MAX, SCORE_MIN};
use crate::errors::{FlowStateError, FlowStateResult};
use crate::models::{TaskContext, UserContext};

/// Validate a task context: non-empty id, scores in [0, 1], non-negative estimate.
pub fn validate_task_context(task: &TaskContext) -> FlowStateResult<()> {
    require_id("task.task_id", &task.task_id)?;
    require_score("task.clarity_score", task.clarity_score)?;
    require_score("task.resource_availability", task.resource_availability)?;
    require_score("task.personal_meaningfulness", task.personal_meaningfulness)?;
    require_score("task.skill_match", task.skill_match)?;
    if let Some(priority) = task.organizational_priority {
        require_score("task.organizational_priority", priority)?;
    }
    if let Some(duration) = task.estimated_duration {
        if duration < chrono::Duration::zero() {
            return Err(FlowStateError::invalid_context(
                "task.estimated_duration",
                format!("{}s", duration.num_seconds()),
                "must not be negative",
            ));
        }
    }
    Ok(())
}

/// Validate a user context: non-empty id, levels in [0, 1], indicators on the 0–10 scale.
pub fn validate_user_context(user: &UserContext) -> FlowStateResult<()> {
    require_id("user.user_id", &user.user_id)?;
    require_score("user.current_stress_level", user.current_stress_level)?;
    require_score("user.energy_level", user.energy_level)?;
    require_indicator("user.anxiety_indicators", user.anxiety_indicators)?;
    require_indicator("user.depression_indicators", user.depression_indicators)?;
    require_indicator("user.attention_difficulties", user.attention_difficulties)?;
    Ok(())
}

/// Validate both records of one analysis request.
pub fn validate_contexts(task: &TaskContext, user: &UserContext) -> FlowStateResult<()> {
    validate_task_context(task)?;
    validate_user_context(user)
}

fn require_id(field: &str, id: &str) -> FlowStateResult<()> {
    if id.trim().is_empty() {
        return Err(FlowStateError::invalid_context(
            field,
            format!("{id:?}"),
            "must not be empty",
        ));
    }
    Ok(())
}

fn require_score(field: &str, value: f64) -> FlowStateResult<()> {
    // NaN fails the range check as well.
    if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
        return Err(FlowStateError::invalid_context(
            field,
            value,
            "must lie in [0, 1]",
        ));
    }
    Ok(())
}

fn require_indicator(field: &str, value: u32) -> FlowStateResult<()> {
    if value > INDICATOR_SCALE_MAX {
        return Err(FlowStateError::invalid_context(
            field,
            value,
            format!("must lie on the 0-{INDICATOR_SCALE_MAX} observation scale"),
        ));
    }
    Ok(())
}
