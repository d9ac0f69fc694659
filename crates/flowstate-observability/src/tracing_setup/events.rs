//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use flowstate_core::models::{ProcrastinationType, ReferralReason, SystemicCause};

/// Log a completed analysis.
pub fn analysis_completed(task_id: &str, primary_type: ProcrastinationType, confidence: f64) {
    tracing::info!(
        event = "analysis_completed",
        task_id = %task_id,
        primary_type = %primary_type,
        confidence = confidence,
        "procrastination analysis completed"
    );
}

/// Log that a referral indicator fired. Only the reason tag is recorded.
pub fn referral_indicator_detected(user_id: &str, reason: ReferralReason) {
    tracing::info!(
        event = "referral_indicator_detected",
        user_id = %user_id,
        reason = %reason,
        "referral indicator detected"
    );
}

/// Log a detected systemic cause.
pub fn systemic_factor_detected(task_id: &str, cause: SystemicCause) {
    tracing::debug!(
        event = "systemic_factor_detected",
        task_id = %task_id,
        cause = %cause,
        "systemic factor detected"
    );
}

/// Log a recorded episode.
pub fn episode_recorded(user_id: &str, task_id: &str, primary_type: ProcrastinationType) {
    tracing::info!(
        event = "episode_recorded",
        user_id = %user_id,
        task_id = %task_id,
        primary_type = %primary_type,
        "procrastination episode recorded"
    );
}

/// Log episodes dropped from the trailing window.
pub fn episodes_pruned(user_id: &str, pruned: usize, retained: usize) {
    tracing::debug!(
        event = "episodes_pruned",
        user_id = %user_id,
        pruned = pruned,
        retained = retained,
        "episodes pruned from window"
    );
}

/// Log a rejected context record.
pub fn context_rejected(task_id: &str, user_id: &str, error: &str) {
    tracing::warn!(
        event = "context_rejected",
        task_id = %task_id,
        user_id = %user_id,
        error = %error,
        "analysis input rejected"
    );
}
