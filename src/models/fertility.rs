use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ovulation estimate and fertile window derived from a period prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilityWindow {
    pub fertile_start: NaiveDate,
    /// The fertile window closes on the ovulation date itself
    pub fertile_end: NaiveDate,
    pub ovulation_date: NaiveDate,
    /// Negative once ovulation has passed
    pub days_until_ovulation: i64,
    /// Conception likelihood score in percent: 20, 60, 85 or 95
    pub fertility_score: u8,
    pub phase: FertilityPhase,
    pub is_high_fertility: bool,
    pub recommendations: Vec<String>,
}

/// Where today falls relative to the estimated ovulation date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FertilityPhase {
    Follicular,
    FertileWindow,
    Ovulation,
    Luteal,
}
