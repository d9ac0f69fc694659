//! # flowstate-procrastination
//!
//! Root-cause classification of a single procrastination episode.
//!
//! ## Decision order
//!
//! | Priority | Verdict | Confidence | Trigger |
//! |----------|---------|------------|---------|
//! | 1 | Professional referral | 0.9 | Any referral indicator |
//! | 2 | Systemic | 0.8 | Systemic score > 0.7 |
//! | 3 | Rational | 0.7 | At least two rational reasons |
//! | 4 | Individual | 0.6 | Otherwise |
//!
//! The first matching branch wins; nothing is mixed across branches.

pub mod addressable;
pub mod engine;
pub mod explanation;
pub mod rational;
pub mod referral;
pub mod systemic;

pub use addressable::AddressableFactorIdentifier;
pub use engine::ProcrastinationAnalyzer;
pub use rational::{RationalAssessment, RationalAvoidanceAssessor};
pub use referral::ProfessionalReferralAssessor;
pub use systemic::SystemicCauseDetector;
