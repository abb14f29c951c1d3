use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Predicted next period window derived from historical start-date intervals.
/// Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclePrediction {
    pub predicted_start: NaiveDate,
    pub predicted_end: NaiveDate,
    /// Average start-to-start interval of the retained history, in days
    pub cycle_length_days: f64,
    /// Assumed bleeding length, in days
    pub period_length_days: u32,
    /// Certainty score in percent, clamped to [30, 95]
    pub confidence: u8,
    pub confidence_level: ConfidenceLevel,
    pub is_regular: bool,
    /// Human-readable notes explaining the score
    pub factors: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ConfidenceLevel::High
        } else if score >= 60 {
            ConfidenceLevel::Medium
        } else if score >= 40 {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::VeryLow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_level_tiers() {
        assert_eq!(ConfidenceLevel::from_score(95), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(80), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(79), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(60), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(59), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_score(40), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_score(39), ConfidenceLevel::VeryLow);
        assert_eq!(ConfidenceLevel::from_score(30), ConfidenceLevel::VeryLow);
    }
}
