use std::collections::HashMap;

use crate::error::CycleError;
use crate::models::{CycleAnalytics, CycleLengthPoint, CycleRecord};
use crate::services::stats::{mean, population_std_dev};

/// Number of symptoms surfaced as "common"
const TOP_SYMPTOM_COUNT: usize = 5;

/// Every day of period-length deviation costs ten points of regularity
const REGULARITY_STD_DEV_SCALE: f64 = 10.0;

/// Aggregate a trailing history window into regularity, symptom and trend
/// analytics.
///
/// Works on period lengths (start to end of a single cycle), which is a
/// different quantity from the start-to-start interval the predictor uses.
/// Fails with `CycleError::InsufficientData` on an empty window rather than
/// returning an empty-but-valid object.
pub fn cycle_analytics(history: &[CycleRecord]) -> Result<CycleAnalytics, CycleError> {
    if history.is_empty() {
        return Err(CycleError::InsufficientData);
    }

    let mut records: Vec<&CycleRecord> = history.iter().collect();
    records.sort_by_key(|r| r.start_date);

    let period_lengths: Vec<f64> = records
        .iter()
        .filter_map(|r| r.period_length_days())
        .map(|days| days as f64)
        .collect();

    let average_period_length = mean(&period_lengths);
    let regularity_score = (100.0
        - REGULARITY_STD_DEV_SCALE * population_std_dev(&period_lengths))
    .clamp(0.0, 100.0);

    let mut symptom_frequency: HashMap<String, usize> = HashMap::new();
    for record in &records {
        for symptom in record.symptom_list() {
            *symptom_frequency.entry(symptom.to_lowercase()).or_insert(0) += 1;
        }
    }
    let common_symptoms = top_symptoms(&symptom_frequency);

    Ok(CycleAnalytics {
        average_period_length,
        total_cycles: records.len(),
        first_cycle_start: records.first().map(|r| r.start_date),
        last_cycle_start: records.last().map(|r| r.start_date),
        regularity_score,
        common_symptoms,
        symptom_frequency,
        length_history: trend_points_sorted(&records),
    })
}

/// Per-completed-cycle charting series over a caller-bounded window,
/// ordered by start date
pub fn trend_points(history: &[CycleRecord]) -> Vec<CycleLengthPoint> {
    let mut records: Vec<&CycleRecord> = history.iter().collect();
    records.sort_by_key(|r| r.start_date);
    trend_points_sorted(&records)
}

fn trend_points_sorted(records: &[&CycleRecord]) -> Vec<CycleLengthPoint> {
    records
        .iter()
        .filter_map(|r| {
            r.period_length_days().map(|days| CycleLengthPoint {
                start: r.start_date,
                length_days: days,
                complete: true,
            })
        })
        .collect()
}

/// Most frequent symptoms, highest count first, ties broken alphabetically
/// so the output is stable
fn top_symptoms(frequency: &HashMap<String, usize>) -> Vec<String> {
    let mut ranked: Vec<(&String, &usize)> = frequency.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(TOP_SYMPTOM_COUNT)
        .map(|(symptom, _)| symptom.clone())
        .collect()
}
