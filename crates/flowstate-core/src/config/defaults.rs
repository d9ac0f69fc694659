// Single source of truth for all default values.

// --- Systemic ---
pub const DEFAULT_CLARITY_THRESHOLD: f64 = 0.3;
pub const DEFAULT_RESOURCE_THRESHOLD: f64 = 0.4;
pub const DEFAULT_DEADLINE_BUFFER_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_MAX_COMPETING_TASKS: usize = 3;
pub const DEFAULT_SYSTEMIC_SCORE_THRESHOLD: f64 = 0.7;

// --- Rational ---
pub const DEFAULT_MEANINGFULNESS_THRESHOLD: f64 = 0.3;
pub const DEFAULT_SKILL_MISMATCH_THRESHOLD: f64 = 0.4;
pub const DEFAULT_SUCCESS_PROBABILITY_THRESHOLD: f64 = 0.3;
pub const DEFAULT_LOW_PRIORITY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MIN_RATIONAL_REASONS: usize = 2;

// --- Referral ---
pub const DEFAULT_ANXIETY_THRESHOLD: u32 = 7;
pub const DEFAULT_DEPRESSION_THRESHOLD: u32 = 6;
pub const DEFAULT_ATTENTION_THRESHOLD: u32 = 8;
pub const DEFAULT_PERFECTIONISM_STRESS_THRESHOLD: f64 = 0.7;
pub const DEFAULT_OVERWHELM_STRESS_THRESHOLD: f64 = 0.8;
pub const DEFAULT_OVERWHELM_ENERGY_THRESHOLD: f64 = 0.3;
pub const DEFAULT_OVERWHELM_PATTERN_COUNT: usize = 5;

// --- Addressable ---
pub const DEFAULT_LEARNABLE_SKILL_MIN: f64 = 0.3;
pub const DEFAULT_LEARNABLE_SKILL_MAX: f64 = 0.7;
pub const DEFAULT_LOW_ENERGY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_CHUNKING_THRESHOLD_MINUTES: i64 = 120; // 2 hours
pub const DEFAULT_CLARIFICATION_THRESHOLD: f64 = 0.5;
pub const DEFAULT_ALTERNATIVE_APPROACH_THRESHOLD: f64 = 0.5;

// --- Patterns ---
pub const DEFAULT_PATTERN_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_SYSTEMIC_INSIGHT_RATIO: f64 = 0.6;
pub const DEFAULT_RATIONAL_INSIGHT_RATIO: f64 = 0.4;

// --- Bounds ---
pub const MAX_PATTERN_WINDOW_DAYS: i64 = 36_500; // 100 years
/// Largest minute count a `chrono::Duration` can hold.
pub const MAX_CHUNKING_THRESHOLD_MINUTES: i64 = i64::MAX / 60_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
