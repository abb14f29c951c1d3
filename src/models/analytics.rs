use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated view of a trailing history window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleAnalytics {
    /// Mean period length (start to end) over completed records, 0 if none
    pub average_period_length: f64,
    pub total_cycles: usize,
    pub first_cycle_start: Option<NaiveDate>,
    pub last_cycle_start: Option<NaiveDate>,
    /// Consistency of period lengths on a 0-100 scale
    pub regularity_score: f64,
    /// Top five symptoms by frequency, most common first
    pub common_symptoms: Vec<String>,
    pub symptom_frequency: HashMap<String, usize>,
    /// Per-completed-cycle series for charting, ordered by start date
    pub length_history: Vec<CycleLengthPoint>,
}

/// One charting point for a completed cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleLengthPoint {
    pub start: NaiveDate,
    pub length_days: i64,
    pub complete: bool,
}

/// Qualitative reading of the analytics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleInsights {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub health_alerts: Vec<String>,
    pub overall_status: CycleStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleStatus {
    Excellent,
    Good,
    NeedsAttention,
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CycleStatus::Excellent => "Excellent",
            CycleStatus::Good => "Good",
            CycleStatus::NeedsAttention => "Needs Attention",
        };
        write!(f, "{}", label)
    }
}
