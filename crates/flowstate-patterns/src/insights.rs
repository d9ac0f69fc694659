//! Ratio-based insights over a user's episodes.

use std::collections::HashMap;

use flowstate_core::config::PatternConfig;
use flowstate_core::models::{ProcrastinationType, UserPatterns};

use crate::episode::Episode;

pub const ORGANIZATIONAL_INSIGHT: &str =
    "Many of your procrastination episodes seem to be caused by organizational issues";
pub const GOOD_INSTINCTS_INSIGHT: &str =
    "You often avoid tasks that may not be worth your time - this could be good instincts";

/// Summarize episodes into counts, most common types and insights.
pub fn summarize(episodes: &[Episode], config: &PatternConfig) -> UserPatterns {
    let total = episodes.len();
    if total == 0 {
        return UserPatterns::default();
    }

    let mut counts: HashMap<ProcrastinationType, usize> = HashMap::new();
    for episode in episodes {
        *counts.entry(episode.primary_type).or_insert(0) += 1;
    }

    // Most frequent first; ties fall back to decision priority order.
    let mut type_counts: Vec<(ProcrastinationType, usize)> = counts.into_iter().collect();
    type_counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let ratio = |ty: ProcrastinationType| {
        let count = type_counts
            .iter()
            .find(|(t, _)| *t == ty)
            .map(|(_, c)| *c)
            .unwrap_or(0);
        count as f64 / total as f64
    };

    let mut insights = Vec::new();
    if ratio(ProcrastinationType::Systemic) > config.systemic_insight_ratio {
        insights.push(ORGANIZATIONAL_INSIGHT.to_string());
    }
    if ratio(ProcrastinationType::Rational) > config.rational_insight_ratio {
        insights.push(GOOD_INSTINCTS_INSIGHT.to_string());
    }

    UserPatterns {
        total_episodes: total,
        common_types: type_counts.iter().map(|(t, _)| *t).collect(),
        type_counts,
        insights,
    }
}
