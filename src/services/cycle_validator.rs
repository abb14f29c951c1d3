use chrono::{Duration, NaiveDate};

use crate::models::{split_symptoms, CreateCycleRequest, CycleRecord, ValidationResult};

/// Bleeding between start and end date must fall in this range, in days
pub const MIN_PERIOD_DAYS: i64 = 1;
pub const MAX_PERIOD_DAYS: i64 = 10;

/// Consecutive cycle starts for the same owner must be at least this far apart
pub const MIN_CYCLE_GAP_DAYS: i64 = 15;
/// A larger gap than this suggests a missed entry and is rejected
pub const MAX_CYCLE_GAP_DAYS: i64 = 60;

pub const MAX_SYMPTOM_ENTRIES: usize = 10;

const MAX_BACKDATE_DAYS: i64 = 365;
// One day of slack so entries logged just after midnight in another timezone pass
const FUTURE_TOLERANCE_DAYS: i64 = 1;

/// Check a submitted cycle entry against the medically-motivated business
/// rules. Every rule runs; the result carries all violations, not just the
/// first. Pure function, no side effects.
pub fn validate_cycle(
    request: &CreateCycleRequest,
    prior_most_recent: Option<&CycleRecord>,
    today: NaiveDate,
) -> ValidationResult {
    let mut violations = Vec::new();

    if let Some(end) = request.end_date {
        let period_days = (end - request.start_date).num_days();
        if !(MIN_PERIOD_DAYS..=MAX_PERIOD_DAYS).contains(&period_days) {
            violations.push(format!(
                "Period length must be between {} and {} days, got {}",
                MIN_PERIOD_DAYS, MAX_PERIOD_DAYS, period_days
            ));
        }
    }

    if request.start_date > today + Duration::days(FUTURE_TOLERANCE_DAYS) {
        violations.push("Cycle start date cannot be in the future".to_string());
    }

    if request.start_date < today - Duration::days(MAX_BACKDATE_DAYS) {
        violations.push("Cycle start date cannot be more than a year in the past".to_string());
    }

    if let Some(prior) = prior_most_recent {
        let gap = (request.start_date - prior.start_date).num_days().abs();
        if gap < MIN_CYCLE_GAP_DAYS {
            violations.push(format!(
                "New cycle starts {} days from the previous one; cycles must be at least {} days apart",
                gap, MIN_CYCLE_GAP_DAYS
            ));
        }
        if gap > MAX_CYCLE_GAP_DAYS {
            violations.push(format!(
                "Gap of {} days since the previous cycle is unusually large; check the start date",
                gap
            ));
        }
    }

    let symptoms = split_symptoms(request.symptoms.as_deref());
    if symptoms.len() > MAX_SYMPTOM_ENTRIES {
        violations.push(format!(
            "At most {} symptoms can be recorded per cycle",
            MAX_SYMPTOM_ENTRIES
        ));
    }

    ValidationResult::from_violations(violations)
}
