//! ProcrastinationPatternTracker — per-user episode windows via DashMap.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use flowstate_core::config::PatternConfig;
use flowstate_core::models::{ProcrastinationAnalysis, UserPatterns};
use flowstate_core::traits::IPatternTracker;
use flowstate_observability::pattern_span;
use flowstate_observability::tracing_setup::events;

use crate::episode::Episode;
use crate::insights;

/// Thread-safe tracker. Records for one user are serialized by the map's
/// shard lock; different users proceed independently.
#[derive(Debug, Clone, Default)]
pub struct ProcrastinationPatternTracker {
    episodes: Arc<DashMap<String, Vec<Episode>>>,
    config: PatternConfig,
}

impl ProcrastinationPatternTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PatternConfig) -> Self {
        Self {
            episodes: Arc::new(DashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Episodes at or before this instant fall out of a window ending at
    /// `now`. `None` when the window reaches past the representable range.
    fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        Duration::try_days(self.config.window_days)
            .and_then(|window| now.checked_sub_signed(window))
    }

    /// Record a verdict stamped with the current time.
    pub fn record_procrastination_episode(
        &self,
        user_id: &str,
        task_id: &str,
        analysis: &ProcrastinationAnalysis,
    ) {
        self.record_procrastination_episode_at(user_id, task_id, analysis, Utc::now());
    }

    /// Record a verdict stamped with `now`, then prune the user's episodes
    /// to the window ending at `now`.
    pub fn record_procrastination_episode_at(
        &self,
        user_id: &str,
        task_id: &str,
        analysis: &ProcrastinationAnalysis,
        now: DateTime<Utc>,
    ) {
        let span = pattern_span!(user_id);
        let _guard = span.enter();

        let episode = Episode::from_analysis(task_id, analysis, now);
        let cutoff = self.cutoff(now);

        let (pruned, retained) = {
            let mut entry = self.episodes.entry(user_id.to_string()).or_default();
            entry.push(episode);
            let before = entry.len();
            entry.retain(|e| e.is_newer_than(cutoff));
            (before - entry.len(), entry.len())
        };

        events::episode_recorded(user_id, task_id, analysis.primary_type);
        if pruned > 0 {
            events::episodes_pruned(user_id, pruned, retained);
        }
    }

    /// Aggregate the user's stored episodes. Reads never prune.
    pub fn get_user_patterns(&self, user_id: &str) -> UserPatterns {
        match self.episodes.get(user_id) {
            Some(entry) => insights::summarize(entry.value(), &self.config),
            None => UserPatterns::default(),
        }
    }

    /// Snapshot of a user's stored episodes, oldest first.
    pub fn episodes(&self, user_id: &str) -> Vec<Episode> {
        self.episodes
            .get(user_id)
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Number of users with stored episodes.
    pub fn user_count(&self) -> usize {
        self.episodes.len()
    }
}

impl IPatternTracker for ProcrastinationPatternTracker {
    fn record_procrastination_episode(
        &self,
        user_id: &str,
        task_id: &str,
        analysis: &ProcrastinationAnalysis,
    ) {
        ProcrastinationPatternTracker::record_procrastination_episode(
            self, user_id, task_id, analysis,
        );
    }

    fn get_user_patterns(&self, user_id: &str) -> UserPatterns {
        ProcrastinationPatternTracker::get_user_patterns(self, user_id)
    }
}
