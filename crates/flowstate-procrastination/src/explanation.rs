//! Fixed user-facing text per verdict.
//!
//! Text depends only on the branch taken (and, for referrals, the reason
//! tag), never on input magnitudes.

use flowstate_core::models::ReferralReason;

pub const SYSTEMIC_EXPLANATION: &str = "Your procrastination on this task appears to be caused by \
organizational or systemic factors outside your control. This is a reasonable response to unclear \
requirements, insufficient resources, or unrealistic expectations.";

pub const SYSTEMIC_ACTIONS: [&str; 4] = [
    "Document the systemic issues affecting this task",
    "Escalate unclear requirements to appropriate stakeholders",
    "Request additional resources or timeline adjustment",
    "This is likely not a personal productivity issue",
];

pub const RATIONAL_EXPLANATION: &str = "Your avoidance of this task appears to be rational \
decision-making: the reasons listed with this analysis suggest the task may not be worth your time \
in its current form. Consider whether the task needs to be modified rather than forcing completion.";

pub const RATIONAL_ACTIONS: [&str; 4] = [
    "Consider whether this task should be eliminated or modified",
    "Explore delegation or collaboration opportunities",
    "Negotiate task requirements or timeline",
    "Your instincts about avoiding this task may be correct",
];

pub const INDIVIDUAL_EXPLANATION: &str = "This procrastination appears to have individual factors \
that you can address. Focus on the specific elements within your control rather than trying to \
force motivation.";

pub const INDIVIDUAL_ACTIONS: [&str; 4] = [
    "Focus on the addressable factors identified below",
    "Try breaking the task into smaller pieces",
    "Consider when your energy levels are best for this type of work",
    "Seek support or clarification where available",
];

const REFERRAL_PREAMBLE: &str = "Your procrastination patterns suggest that professional mental \
health support could be helpful. This is very common and nothing to be concerned about.";

pub const REFERRAL_ACTIONS: [&str; 3] = [
    "Consider scheduling an appointment with a mental health professional",
    "Share what you have noticed with someone you trust",
    "Keep tasks small and forgiving while you look for support",
];

/// Referral explanation: fixed preamble followed by the reason's guidance.
pub fn referral_explanation(reason: ReferralReason) -> String {
    format!("{REFERRAL_PREAMBLE} {}.", reason.guidance())
}

/// Convert a fixed action list into owned strings.
pub fn actions(list: &[&str]) -> Vec<String> {
    list.iter().map(|a| (*a).to_string()).collect()
}
