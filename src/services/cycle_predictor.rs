use chrono::{Duration, NaiveDate};

use crate::error::CycleError;
use crate::models::{ConfidenceLevel, CyclePrediction, CycleRecord};
use crate::services::stats::{mean, population_std_dev};

/// Start-to-start intervals outside this range are treated as data errors
/// and excluded from the forecast
pub const MIN_CYCLE_INTERVAL_DAYS: f64 = 21.0;
pub const MAX_CYCLE_INTERVAL_DAYS: f64 = 45.0;

/// Assumed bleeding length for the predicted window, in days
pub const PREDICTED_PERIOD_DAYS: u32 = 5;

const MIN_CONFIDENCE: f64 = 30.0;
const MAX_CONFIDENCE: f64 = 95.0;

/// Cycles varying by no more than this many days count as regular
const REGULAR_STD_DEV_DAYS: f64 = 6.0;

/// Predict the next expected period window from historical start dates.
///
/// Fails with `CycleError::InsufficientData` when the history is empty or no
/// interval survives the plausibility filter.
pub fn predict_next_cycle(history: &[CycleRecord]) -> Result<CyclePrediction, CycleError> {
    if history.is_empty() {
        return Err(CycleError::InsufficientData);
    }

    let mut starts: Vec<NaiveDate> = history.iter().map(|r| r.start_date).collect();
    starts.sort_unstable();

    let intervals: Vec<f64> = starts
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days() as f64)
        .collect();

    let valid_intervals: Vec<f64> = intervals
        .into_iter()
        .filter(|days| (MIN_CYCLE_INTERVAL_DAYS..=MAX_CYCLE_INTERVAL_DAYS).contains(days))
        .collect();

    if valid_intervals.is_empty() {
        return Err(CycleError::InsufficientData);
    }

    let cycle_length_days = mean(&valid_intervals);
    let latest_start = starts[starts.len() - 1];
    let predicted_start = latest_start + Duration::days(cycle_length_days.round() as i64);
    let predicted_end = predicted_start + Duration::days(PREDICTED_PERIOD_DAYS as i64);

    let sigma = population_std_dev(&valid_intervals);
    let confidence = confidence_score(valid_intervals.len(), sigma);
    let is_regular = valid_intervals.len() >= 3 && sigma <= REGULAR_STD_DEV_DAYS;

    Ok(CyclePrediction {
        predicted_start,
        predicted_end,
        cycle_length_days,
        period_length_days: PREDICTED_PERIOD_DAYS,
        confidence,
        confidence_level: ConfidenceLevel::from_score(confidence),
        is_regular,
        factors: build_factors(valid_intervals.len(), is_regular, confidence),
    })
}

/// Score certainty from cycle regularity and data quantity.
///
/// Bounded to [30, 95]: some predictive value always remains, and biological
/// variability caps the upper end.
fn confidence_score(interval_count: usize, sigma: f64) -> u8 {
    if interval_count < 2 {
        return MIN_CONFIDENCE as u8;
    }

    // Every day of deviation costs eight points of regularity
    let regularity_score = (100.0 - 8.0 * sigma).max(0.0);
    // Each tracked interval adds five points, capped at 25
    let data_bonus = (5.0 * interval_count as f64).min(25.0);

    (0.75 * regularity_score + data_bonus).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8
}

fn build_factors(interval_count: usize, is_regular: bool, confidence: u8) -> Vec<String> {
    let regularity_note = if is_regular {
        "Cycles are regular"
    } else {
        "Cycles show some variation"
    };

    let sufficiency_note = if interval_count >= 6 {
        "Sufficient history for a reliable forecast"
    } else if interval_count >= 3 {
        "Moderate history; the forecast will improve with more data"
    } else {
        "Limited history; treat the forecast as a rough estimate"
    };

    vec![
        format!("Based on {} tracked cycle intervals", interval_count),
        regularity_note.to_string(),
        format!("Prediction confidence: {}%", confidence),
        sufficiency_note.to_string(),
    ]
}
