use chrono::Duration;
use flowstate_core::models::{TaskContext, UserContext};
use flowstate_core::validation::*;
use flowstate_core::FlowStateError;
use proptest::prelude::*;

fn make_task() -> TaskContext {
    TaskContext {
        task_id: "t1".into(),
        description: "Draft proposal".into(),
        deadline: None,
        estimated_duration: Some(Duration::hours(1)),
        clarity_score: 0.5,
        resource_availability: 0.5,
        personal_meaningfulness: 0.5,
        skill_match: 0.5,
        competing_tasks: vec![],
        organizational_priority: Some(0.5),
    }
}

fn make_user() -> UserContext {
    UserContext {
        user_id: "u1".into(),
        current_stress_level: 0.5,
        energy_level: 0.5,
        recent_procrastination_patterns: vec![],
        support_systems: vec![],
        previous_successful_strategies: vec![],
        anxiety_indicators: 0,
        depression_indicators: 0,
        attention_difficulties: 0,
    }
}

fn rejected_field(result: flowstate_core::FlowStateResult<()>) -> String {
    match result {
        Err(FlowStateError::InvalidContext { field, .. }) => field,
        other => panic!("Expected InvalidContext, got {:?}", other),
    }
}

#[test]
fn well_formed_contexts_pass() {
    assert!(validate_contexts(&make_task(), &make_user()).is_ok());
}

#[test]
fn boundary_scores_are_valid() {
    let mut task = make_task();
    task.clarity_score = 0.0;
    task.skill_match = 1.0;
    assert!(validate_task_context(&task).is_ok());
}

#[test]
fn score_above_one_rejected() {
    let mut task = make_task();
    task.clarity_score = 1.01;
    assert_eq!(rejected_field(validate_task_context(&task)), "task.clarity_score");
}

#[test]
fn negative_score_rejected() {
    let mut task = make_task();
    task.resource_availability = -0.1;
    assert_eq!(
        rejected_field(validate_task_context(&task)),
        "task.resource_availability"
    );
}

#[test]
fn nan_score_rejected() {
    let mut user = make_user();
    user.energy_level = f64::NAN;
    assert_eq!(rejected_field(validate_user_context(&user)), "user.energy_level");
}

#[test]
fn out_of_range_priority_rejected() {
    let mut task = make_task();
    task.organizational_priority = Some(2.0);
    assert_eq!(
        rejected_field(validate_task_context(&task)),
        "task.organizational_priority"
    );
}

#[test]
fn negative_duration_rejected() {
    let mut task = make_task();
    task.estimated_duration = Some(Duration::minutes(-5));
    assert_eq!(
        rejected_field(validate_task_context(&task)),
        "task.estimated_duration"
    );
}

#[test]
fn empty_ids_rejected() {
    let mut task = make_task();
    task.task_id = "  ".into();
    assert_eq!(rejected_field(validate_task_context(&task)), "task.task_id");

    let mut user = make_user();
    user.user_id = String::new();
    assert_eq!(rejected_field(validate_user_context(&user)), "user.user_id");
}

#[test]
fn indicator_above_scale_rejected() {
    let mut user = make_user();
    user.attention_difficulties = 11;
    assert_eq!(
        rejected_field(validate_user_context(&user)),
        "user.attention_difficulties"
    );
}

#[test]
fn task_is_checked_before_user() {
    let mut task = make_task();
    task.skill_match = 3.0;
    let mut user = make_user();
    user.energy_level = 3.0;
    assert_eq!(rejected_field(validate_contexts(&task, &user)), "task.skill_match");
}

proptest! {
    #[test]
    fn any_normalized_score_is_accepted(score in 0.0f64..=1.0) {
        let mut task = make_task();
        task.personal_meaningfulness = score;
        prop_assert!(validate_task_context(&task).is_ok());
    }

    #[test]
    fn any_score_above_one_is_rejected(score in 1.000_001f64..1_000.0) {
        let mut user = make_user();
        user.current_stress_level = score;
        prop_assert!(validate_user_context(&user).is_err());
    }
}
