/// FlowState engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of the self-reported indicator observation scale (0–10).
pub const INDICATOR_SCALE_MAX: u32 = 10;

/// Lower bound of every normalized score.
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of every normalized score.
pub const SCORE_MAX: f64 = 1.0;

/// Pattern tag that, combined with high stress, suggests perfectionism paralysis.
pub const PERFECTIONISM_PATTERN: &str = "perfectionism";
