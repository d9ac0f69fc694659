//! ProcrastinationAnalyzer — runs the four assessors as a strict decision tree.

use chrono::{DateTime, Utc};
use flowstate_core::errors::FlowStateResult;
use flowstate_core::models::{
    ProcrastinationAnalysis, ProcrastinationType, ReferralReason, SystemicCause, TaskContext,
    UserContext,
};
use flowstate_core::traits::IProcrastinationAnalyzer;
use flowstate_core::validation;
use flowstate_core::FlowStateConfig;
use flowstate_observability::analysis_span;
use flowstate_observability::tracing_setup::events;
use tracing::debug;

use crate::addressable::AddressableFactorIdentifier;
use crate::explanation;
use crate::rational::{RationalAssessment, RationalAvoidanceAssessor};
use crate::referral::ProfessionalReferralAssessor;
use crate::systemic::SystemicCauseDetector;

/// Orchestrates referral → systemic → rational → individual classification.
///
/// Pure given its inputs: the same task, user and `now` always yield the
/// same analysis.
#[derive(Debug, Clone, Default)]
pub struct ProcrastinationAnalyzer {
    systemic_detector: SystemicCauseDetector,
    rational_assessor: RationalAvoidanceAssessor,
    referral_assessor: ProfessionalReferralAssessor,
    addressable_identifier: AddressableFactorIdentifier,
}

impl ProcrastinationAnalyzer {
    /// Create an analyzer with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer whose assessors read thresholds from `config`.
    pub fn with_config(config: &FlowStateConfig) -> Self {
        Self {
            systemic_detector: SystemicCauseDetector::with_config(config.systemic.clone()),
            rational_assessor: RationalAvoidanceAssessor::with_config(config.rational.clone()),
            referral_assessor: ProfessionalReferralAssessor::with_config(config.referral.clone()),
            addressable_identifier: AddressableFactorIdentifier::with_config(
                config.addressable.clone(),
            ),
        }
    }

    /// Classify one episode against the current time.
    pub fn analyze_procrastination(
        &self,
        task: &TaskContext,
        user: &UserContext,
    ) -> FlowStateResult<ProcrastinationAnalysis> {
        self.analyze_procrastination_at(task, user, Utc::now())
    }

    /// Classify one episode with an explicit clock.
    ///
    /// Input is validated before any assessor runs; on error nothing is computed.
    pub fn analyze_procrastination_at(
        &self,
        task: &TaskContext,
        user: &UserContext,
        now: DateTime<Utc>,
    ) -> FlowStateResult<ProcrastinationAnalysis> {
        let span = analysis_span!(task.task_id, user.user_id);
        let _guard = span.enter();

        if let Err(err) = validation::validate_contexts(task, user) {
            events::context_rejected(&task.task_id, &user.user_id, &err.to_string());
            return Err(err);
        }

        let analysis = self.classify(task, user, now);
        events::analysis_completed(&task.task_id, analysis.primary_type, analysis.confidence);
        Ok(analysis)
    }

    fn classify(
        &self,
        task: &TaskContext,
        user: &UserContext,
        now: DateTime<Utc>,
    ) -> ProcrastinationAnalysis {
        if let Some(reason) = self.referral_assessor.assess_referral_need(user, task) {
            return referral_analysis(reason);
        }

        let systemic_factors = self.systemic_detector.analyze_systemic_factors(task, now);
        let systemic_score = self
            .systemic_detector
            .calculate_systemic_score(&systemic_factors);
        debug!(task_id = %task.task_id, systemic_score, "systemic score computed");
        if self.systemic_detector.is_systemic(systemic_score) {
            return systemic_analysis(systemic_factors.into_iter().collect());
        }

        let rational = self.rational_assessor.assess_rational_avoidance(task, user);
        if rational.is_rational {
            return rational_analysis(rational);
        }

        let addressable = self
            .addressable_identifier
            .identify_addressable_factors(task, user);
        individual_analysis(addressable)
    }
}

impl IProcrastinationAnalyzer for ProcrastinationAnalyzer {
    fn analyze_procrastination(
        &self,
        task: &TaskContext,
        user: &UserContext,
    ) -> FlowStateResult<ProcrastinationAnalysis> {
        ProcrastinationAnalyzer::analyze_procrastination(self, task, user)
    }
}

fn referral_analysis(reason: ReferralReason) -> ProcrastinationAnalysis {
    let primary_type = ProcrastinationType::ProfessionalReferralNeeded;
    ProcrastinationAnalysis {
        primary_type,
        confidence: primary_type.confidence(),
        systemic_factors: Vec::new(),
        rational_factors: Vec::new(),
        addressable_factors: Vec::new(),
        recommended_actions: explanation::actions(&explanation::REFERRAL_ACTIONS),
        referral_reason: Some(reason),
        user_explanation: explanation::referral_explanation(reason),
    }
}

fn systemic_analysis(factors: Vec<SystemicCause>) -> ProcrastinationAnalysis {
    let primary_type = ProcrastinationType::Systemic;
    ProcrastinationAnalysis {
        primary_type,
        confidence: primary_type.confidence(),
        systemic_factors: factors,
        rational_factors: Vec::new(),
        addressable_factors: Vec::new(),
        recommended_actions: explanation::actions(&explanation::SYSTEMIC_ACTIONS),
        referral_reason: None,
        user_explanation: explanation::SYSTEMIC_EXPLANATION.to_string(),
    }
}

fn rational_analysis(assessment: RationalAssessment) -> ProcrastinationAnalysis {
    let primary_type = ProcrastinationType::Rational;
    ProcrastinationAnalysis {
        primary_type,
        confidence: primary_type.confidence(),
        systemic_factors: Vec::new(),
        rational_factors: assessment.reasons,
        addressable_factors: Vec::new(),
        recommended_actions: explanation::actions(&explanation::RATIONAL_ACTIONS),
        referral_reason: None,
        user_explanation: explanation::RATIONAL_EXPLANATION.to_string(),
    }
}

fn individual_analysis(addressable: Vec<String>) -> ProcrastinationAnalysis {
    let primary_type = ProcrastinationType::Individual;
    ProcrastinationAnalysis {
        primary_type,
        confidence: primary_type.confidence(),
        systemic_factors: Vec::new(),
        rational_factors: Vec::new(),
        addressable_factors: addressable,
        recommended_actions: explanation::actions(&explanation::INDIVIDUAL_ACTIONS),
        referral_reason: None,
        user_explanation: explanation::INDIVIDUAL_EXPLANATION.to_string(),
    }
}
