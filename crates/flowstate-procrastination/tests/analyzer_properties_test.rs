use chrono::{Duration, TimeZone, Utc};
use flowstate_core::models::*;
use flowstate_procrastination::ProcrastinationAnalyzer;
use proptest::prelude::*;

fn arb_task() -> impl Strategy<Value = TaskContext> {
    (
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0),
        proptest::option::of(0.0f64..=1.0),
        proptest::option::of(-48i64..240),
        proptest::option::of(0i64..600),
        0usize..8,
    )
        .prop_map(
            |((clarity, resources, meaning, skill), priority, deadline_h, estimate_min, n)| {
                let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
                TaskContext {
                    task_id: "prop-task".into(),
                    description: "generated".into(),
                    deadline: deadline_h.map(|h| now + Duration::hours(h)),
                    estimated_duration: estimate_min.map(Duration::minutes),
                    clarity_score: clarity,
                    resource_availability: resources,
                    personal_meaningfulness: meaning,
                    skill_match: skill,
                    competing_tasks: (0..n).map(|i| format!("t{i}")).collect(),
                    organizational_priority: priority,
                }
            },
        )
}

fn arb_user() -> impl Strategy<Value = UserContext> {
    (
        0.0f64..=1.0,
        0.0f64..=1.0,
        0u32..=10,
        0u32..=10,
        0u32..=10,
        proptest::collection::vec(
            prop_oneof![
                Just("perfectionism".to_string()),
                Just("unclear_tasks".to_string()),
                Just("overwhelming_projects".to_string()),
            ],
            0..8,
        ),
        proptest::bool::ANY,
    )
        .prop_map(
            |(stress, energy, anxiety, depression, attention, patterns, has_support)| UserContext {
                user_id: "prop-user".into(),
                current_stress_level: stress,
                energy_level: energy,
                recent_procrastination_patterns: patterns,
                support_systems: if has_support {
                    vec!["mentor".into()]
                } else {
                    vec![]
                },
                previous_successful_strategies: vec![],
                anxiety_indicators: anxiety,
                depression_indicators: depression,
                attention_difficulties: attention,
            },
        )
}

proptest! {
    #[test]
    fn exactly_one_factor_list_matches_primary_type(task in arb_task(), user in arb_user()) {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let analysis = ProcrastinationAnalyzer::new()
            .analyze_procrastination_at(&task, &user, now)
            .unwrap();

        prop_assert!(analysis.populated_factor_lists() <= 1);
        match analysis.primary_type {
            ProcrastinationType::ProfessionalReferralNeeded => {
                prop_assert_eq!(analysis.populated_factor_lists(), 0);
                prop_assert!(analysis.referral_reason.is_some());
            }
            ProcrastinationType::Systemic => {
                prop_assert!(!analysis.systemic_factors.is_empty());
                prop_assert!(analysis.referral_reason.is_none());
            }
            ProcrastinationType::Rational => {
                prop_assert!(analysis.rational_factors.len() >= 2);
                prop_assert!(analysis.referral_reason.is_none());
            }
            ProcrastinationType::Individual => {
                prop_assert!(analysis.systemic_factors.is_empty());
                prop_assert!(analysis.rational_factors.is_empty());
                prop_assert!(analysis.referral_reason.is_none());
            }
        }
    }

    #[test]
    fn confidence_is_fixed_per_type(task in arb_task(), user in arb_user()) {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let analysis = ProcrastinationAnalyzer::new()
            .analyze_procrastination_at(&task, &user, now)
            .unwrap();
        prop_assert_eq!(analysis.confidence, analysis.primary_type.confidence());
        prop_assert!(!analysis.user_explanation.is_empty());
        prop_assert!((1..=5).contains(&analysis.recommended_actions.len()));
    }

    #[test]
    fn analysis_is_deterministic(task in arb_task(), user in arb_user()) {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let analyzer = ProcrastinationAnalyzer::new();
        let first = analyzer.analyze_procrastination_at(&task, &user, now).unwrap();
        let second = analyzer.analyze_procrastination_at(&task, &user, now).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn high_anxiety_always_refers(task in arb_task(), user in arb_user(), anxiety in 7u32..=10) {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let user = UserContext { anxiety_indicators: anxiety, ..user };
        let analysis = ProcrastinationAnalyzer::new()
            .analyze_procrastination_at(&task, &user, now)
            .unwrap();
        prop_assert_eq!(analysis.referral_reason, Some(ReferralReason::PersistentAnxiety));
    }
}
