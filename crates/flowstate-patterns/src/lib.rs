//! # flowstate-patterns
//!
//! Per-user record of recent procrastination verdicts, kept for a trailing
//! window (30 days by default) and summarized into simple ratio-based
//! insights. Storage is in memory only; the tracker is constructed and owned
//! by the caller.

pub mod episode;
pub mod insights;
pub mod tracker;

pub use episode::Episode;
pub use tracker::ProcrastinationPatternTracker;
