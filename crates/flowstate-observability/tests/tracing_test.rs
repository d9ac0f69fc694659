use flowstate_core::config::ObservabilityConfig;
use flowstate_core::models::{ProcrastinationType, ReferralReason, SystemicCause};
use flowstate_observability::tracing_setup::{events, spans};
use flowstate_observability::{analysis_span, pattern_span};

#[test]
fn span_names_match_macros() {
    let analysis = analysis_span!("task-1", "user-1");
    let patterns = pattern_span!("user-1");
    // Without a subscriber the spans are disabled; metadata is only present when enabled.
    if let Some(meta) = analysis.metadata() {
        assert_eq!(meta.name(), spans::names::ANALYSIS);
    }
    if let Some(meta) = patterns.metadata() {
        assert_eq!(meta.name(), spans::names::PATTERNS);
    }
}

#[test]
fn init_is_idempotent() {
    let first = flowstate_observability::init_tracing_with_filter("debug");
    let second = flowstate_observability::init_from_config(&ObservabilityConfig::default());
    // Only one global subscriber can be installed per process.
    assert!(!(first && second));
}

#[test]
fn events_emit_without_panicking() {
    let _ = flowstate_observability::init_tracing_with_filter("trace");
    let span = analysis_span!("task-1", "user-1");
    let _guard = span.enter();
    events::analysis_completed("task-1", ProcrastinationType::Systemic, 0.8);
    events::referral_indicator_detected("user-1", ReferralReason::PersistentAnxiety);
    events::systemic_factor_detected("task-1", SystemicCause::ResourceShortage);
    events::episode_recorded("user-1", "task-1", ProcrastinationType::Individual);
    events::episodes_pruned("user-1", 2, 5);
    events::context_rejected("task-1", "user-1", "invalid context");
}
