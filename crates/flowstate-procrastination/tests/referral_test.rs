use flowstate_core::models::{ReferralReason, TaskContext, UserContext};
use flowstate_procrastination::ProfessionalReferralAssessor;

fn make_task() -> TaskContext {
    TaskContext {
        task_id: "task".into(),
        description: "Write thesis chapter".into(),
        deadline: None,
        estimated_duration: None,
        clarity_score: 0.8,
        resource_availability: 0.8,
        personal_meaningfulness: 0.8,
        skill_match: 0.8,
        competing_tasks: vec![],
        organizational_priority: None,
    }
}

fn make_user() -> UserContext {
    UserContext {
        user_id: "user".into(),
        current_stress_level: 0.3,
        energy_level: 0.8,
        recent_procrastination_patterns: vec![],
        support_systems: vec![],
        previous_successful_strategies: vec![],
        anxiety_indicators: 0,
        depression_indicators: 0,
        attention_difficulties: 0,
    }
}

fn assess(user: &UserContext) -> Option<ReferralReason> {
    ProfessionalReferralAssessor::new().assess_referral_need(user, &make_task())
}

fn patterns(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("pattern_{i}")).collect()
}

#[test]
fn no_indicators_no_referral() {
    assert_eq!(assess(&make_user()), None);
}

#[test]
fn indicator_thresholds_are_inclusive() {
    let mut user = make_user();
    user.anxiety_indicators = 6;
    assert_eq!(assess(&user), None);
    user.anxiety_indicators = 7;
    assert_eq!(assess(&user), Some(ReferralReason::PersistentAnxiety));

    let mut user = make_user();
    user.depression_indicators = 5;
    assert_eq!(assess(&user), None);
    user.depression_indicators = 6;
    assert_eq!(assess(&user), Some(ReferralReason::DepressionIndicators));

    let mut user = make_user();
    user.attention_difficulties = 7;
    assert_eq!(assess(&user), None);
    user.attention_difficulties = 8;
    assert_eq!(assess(&user), Some(ReferralReason::AttentionDifficulties));
}

#[test]
fn anxiety_wins_over_every_later_reason() {
    let mut user = make_user();
    user.anxiety_indicators = 9;
    user.depression_indicators = 9;
    user.attention_difficulties = 9;
    user.recent_procrastination_patterns = vec!["perfectionism".into()];
    user.current_stress_level = 0.95;
    assert_eq!(assess(&user), Some(ReferralReason::PersistentAnxiety));
}

#[test]
fn depression_wins_over_attention() {
    let mut user = make_user();
    user.depression_indicators = 6;
    user.attention_difficulties = 10;
    assert_eq!(assess(&user), Some(ReferralReason::DepressionIndicators));
}

#[test]
fn perfectionism_requires_high_stress() {
    let mut user = make_user();
    user.recent_procrastination_patterns = vec!["perfectionism".into()];
    user.current_stress_level = 0.7;
    assert_eq!(assess(&user), None);

    user.current_stress_level = 0.71;
    assert_eq!(assess(&user), Some(ReferralReason::PerfectionismParalysis));
}

#[test]
fn chronic_overwhelm_requires_all_three_conditions() {
    let mut user = make_user();
    user.current_stress_level = 0.9;
    user.energy_level = 0.2;
    user.recent_procrastination_patterns = patterns(6);
    assert_eq!(assess(&user), Some(ReferralReason::ChronicOverwhelm));

    // Exactly five patterns is not more than five.
    user.recent_procrastination_patterns = patterns(5);
    assert_eq!(assess(&user), None);

    user.recent_procrastination_patterns = patterns(6);
    user.energy_level = 0.3;
    assert_eq!(assess(&user), None);

    user.energy_level = 0.2;
    user.current_stress_level = 0.8;
    assert_eq!(assess(&user), None);
}

#[test]
fn perfectionism_checked_before_overwhelm() {
    let mut user = make_user();
    user.current_stress_level = 0.9;
    user.energy_level = 0.1;
    let mut tags = patterns(6);
    tags.push("perfectionism".into());
    user.recent_procrastination_patterns = tags;
    assert_eq!(assess(&user), Some(ReferralReason::PerfectionismParalysis));
}
