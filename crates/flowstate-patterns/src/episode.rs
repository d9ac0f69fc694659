//! Episode — one recorded verdict for a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flowstate_core::models::{ProcrastinationAnalysis, ProcrastinationType, SystemicCause};

/// Snapshot of a verdict at the moment it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub episode_id: String,
    pub timestamp: DateTime<Utc>,
    pub task_id: String,
    pub primary_type: ProcrastinationType,
    pub systemic_factors: Vec<SystemicCause>,
    pub rational_factors: Vec<String>,
}

impl Episode {
    pub fn from_analysis(
        task_id: &str,
        analysis: &ProcrastinationAnalysis,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            episode_id: uuid::Uuid::new_v4().to_string(),
            timestamp,
            task_id: task_id.to_string(),
            primary_type: analysis.primary_type,
            systemic_factors: analysis.systemic_factors.clone(),
            rational_factors: analysis.rational_factors.clone(),
        }
    }

    /// Whether this episode is newer than `cutoff`. With no cutoff every
    /// episode is retained.
    pub fn is_newer_than(&self, cutoff: Option<DateTime<Utc>>) -> bool {
        cutoff.map_or(true, |cutoff| self.timestamp > cutoff)
    }
}
