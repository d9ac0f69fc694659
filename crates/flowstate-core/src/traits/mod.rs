mod analyzer;
mod pattern_tracker;

pub use analyzer::IProcrastinationAnalyzer;
pub use pattern_tracker::IPatternTracker;
