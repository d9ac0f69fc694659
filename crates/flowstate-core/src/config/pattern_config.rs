use serde::{Deserialize, Serialize};

use super::defaults;

/// Pattern tracker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Trailing window (days) of retained episodes.
    pub window_days: i64,
    /// Systemic share above this yields the organizational-issues insight.
    pub systemic_insight_ratio: f64,
    /// Rational share above this yields the good-instincts insight.
    pub rational_insight_ratio: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            window_days: defaults::DEFAULT_PATTERN_WINDOW_DAYS,
            systemic_insight_ratio: defaults::DEFAULT_SYSTEMIC_INSIGHT_RATIO,
            rational_insight_ratio: defaults::DEFAULT_RATIONAL_INSIGHT_RATIO,
        }
    }
}
