use chrono::{Duration, NaiveDate};

use crate::models::{CyclePrediction, FertilityPhase, FertilityWindow};

/// Sperm survival bounds the fertile window to the five days before ovulation
const FERTILE_WINDOW_LEAD_DAYS: i64 = 5;

/// Derive the ovulation date and fertile window from a period prediction.
///
/// The luteal phase between ovulation and the next period runs 12-16 days
/// depending on overall cycle length; ovulation is counted back from the
/// predicted start.
pub fn fertility_window(prediction: &CyclePrediction, today: NaiveDate) -> FertilityWindow {
    let luteal_days = luteal_phase_days(prediction.cycle_length_days);
    let ovulation_date = prediction.predicted_start - Duration::days(luteal_days);
    let fertile_start = ovulation_date - Duration::days(FERTILE_WINDOW_LEAD_DAYS);
    let fertile_end = ovulation_date;

    let days_until_ovulation = (ovulation_date - today).num_days();

    FertilityWindow {
        fertile_start,
        fertile_end,
        ovulation_date,
        days_until_ovulation,
        fertility_score: fertility_score(days_until_ovulation),
        phase: phase_for(days_until_ovulation),
        is_high_fertility: days_until_ovulation.abs() <= 2,
        recommendations: recommendations_for(days_until_ovulation),
    }
}

fn luteal_phase_days(cycle_length_days: f64) -> i64 {
    if cycle_length_days < 25.0 {
        12
    } else if cycle_length_days > 35.0 {
        16
    } else {
        14
    }
}

fn fertility_score(days_until_ovulation: i64) -> u8 {
    match days_until_ovulation.abs() {
        0..=1 => 95,
        2 => 85,
        3..=5 => 60,
        _ => 20,
    }
}

fn phase_for(days_until_ovulation: i64) -> FertilityPhase {
    if days_until_ovulation <= -2 {
        FertilityPhase::Luteal
    } else if days_until_ovulation <= 0 {
        FertilityPhase::Ovulation
    } else if days_until_ovulation <= 5 {
        FertilityPhase::FertileWindow
    } else {
        FertilityPhase::Follicular
    }
}

fn recommendations_for(days_until_ovulation: i64) -> Vec<String> {
    let tier_note = match days_until_ovulation.abs() {
        0..=1 => "Ovulation is expected within a day; conception chances are at their peak",
        2 => "You are entering the most fertile part of your cycle",
        3..=5 => "The fertile window is approaching; ovulation is a few days away",
        _ => "Fertility is low at this point in the cycle",
    };

    vec![
        tier_note.to_string(),
        "Stay hydrated and keep a balanced diet".to_string(),
        "Track any symptoms to improve future predictions".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConfidenceLevel;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn prediction(predicted_start: NaiveDate, cycle_length_days: f64) -> CyclePrediction {
        CyclePrediction {
            predicted_start,
            predicted_end: predicted_start + Duration::days(5),
            cycle_length_days,
            period_length_days: 5,
            confidence: 85,
            confidence_level: ConfidenceLevel::High,
            is_regular: true,
            factors: Vec::new(),
        }
    }

    #[test]
    fn ovulation_sits_one_luteal_phase_before_the_predicted_start() {
        let prediction = prediction(date(2024, 3, 25), 28.0);
        let window = fertility_window(&prediction, date(2024, 3, 1));

        assert_eq!(window.ovulation_date, date(2024, 3, 11));
        assert_eq!(window.fertile_end, window.ovulation_date);
        assert_eq!(window.fertile_start, date(2024, 3, 6));
    }

    #[test]
    fn short_cycles_shorten_the_luteal_phase() {
        assert_eq!(luteal_phase_days(24.9), 12);
        assert_eq!(luteal_phase_days(25.0), 14);
        assert_eq!(luteal_phase_days(35.0), 14);
        assert_eq!(luteal_phase_days(35.1), 16);
    }

    #[test]
    fn days_until_ovulation_goes_negative_after_the_fact() {
        let prediction = prediction(date(2024, 3, 25), 28.0);
        let window = fertility_window(&prediction, date(2024, 3, 15));

        assert_eq!(window.days_until_ovulation, -4);
        assert_eq!(window.phase, FertilityPhase::Luteal);
    }

    #[test]
    fn score_buckets_by_distance_to_ovulation() {
        assert_eq!(fertility_score(0), 95);
        assert_eq!(fertility_score(-1), 95);
        assert_eq!(fertility_score(2), 85);
        assert_eq!(fertility_score(-2), 85);
        assert_eq!(fertility_score(5), 60);
        assert_eq!(fertility_score(-4), 60);
        assert_eq!(fertility_score(6), 20);
        assert_eq!(fertility_score(-9), 20);
    }

    #[test]
    fn phase_buckets_by_signed_distance() {
        assert_eq!(phase_for(-3), FertilityPhase::Luteal);
        assert_eq!(phase_for(-2), FertilityPhase::Luteal);
        assert_eq!(phase_for(-1), FertilityPhase::Ovulation);
        assert_eq!(phase_for(0), FertilityPhase::Ovulation);
        assert_eq!(phase_for(1), FertilityPhase::FertileWindow);
        assert_eq!(phase_for(5), FertilityPhase::FertileWindow);
        assert_eq!(phase_for(6), FertilityPhase::Follicular);
    }

    #[test]
    fn high_fertility_within_two_days_of_ovulation() {
        let prediction = prediction(date(2024, 3, 25), 28.0);

        let near = fertility_window(&prediction, date(2024, 3, 10));
        assert!(near.is_high_fertility);
        assert_eq!(near.fertility_score, 95);

        let far = fertility_window(&prediction, date(2024, 3, 1));
        assert!(!far.is_high_fertility);
        assert_eq!(far.fertility_score, 20);
    }

    #[test]
    fn recommendations_carry_a_tier_note_and_general_wellness_items() {
        let prediction = prediction(date(2024, 3, 25), 28.0);
        let window = fertility_window(&prediction, date(2024, 3, 10));

        assert_eq!(window.recommendations.len(), 3);
        assert!(window.recommendations[0].contains("peak"));
        assert!(window.recommendations[1].contains("hydrated"));
    }
}
