use chrono::{Duration, NaiveDate};

use crate::models::{CyclePhase, CyclePrediction, CycleRecord, CycleReminder, FertilityWindow};

/// Ovulation alerts go out two days ahead, fertile-window alerts one day ahead
const OVULATION_LEAD_DAYS: i64 = 2;
const FERTILE_WINDOW_LEAD_DAYS: i64 = 1;

/// Build reminder content for the delivery layer from a fresh prediction.
///
/// Reminders that would already have fired are dropped. Pure function; the
/// caller decides whether anything gets persisted or sent.
pub fn plan_reminders(
    record: &CycleRecord,
    prediction: &CyclePrediction,
    window: &FertilityWindow,
    today: NaiveDate,
) -> Vec<CycleReminder> {
    let mut reminders = Vec::new();

    if let Some(notify_days) = record.notify_before_days.filter(|days| *days > 0) {
        reminders.push(CycleReminder {
            phase: CyclePhase::Menstrual,
            scheduled_for: prediction.predicted_start - Duration::days(notify_days as i64),
            message: format!(
                "Your period is expected to start in {} days on {}. Confidence: {}%",
                notify_days,
                prediction.predicted_start.format("%b %d, %Y"),
                prediction.confidence
            ),
        });
    }

    reminders.push(CycleReminder {
        phase: CyclePhase::Ovulation,
        scheduled_for: window.ovulation_date - Duration::days(OVULATION_LEAD_DAYS),
        message: format!(
            "Your ovulation is expected on {}. Your fertile window starts soon!",
            window.ovulation_date.format("%b %d, %Y")
        ),
    });

    reminders.push(CycleReminder {
        phase: CyclePhase::Follicular,
        scheduled_for: window.fertile_start - Duration::days(FERTILE_WINDOW_LEAD_DAYS),
        message: format!(
            "Your fertile window starts tomorrow ({}) and lasts until {}",
            window.fertile_start.format("%b %d, %Y"),
            window.fertile_end.format("%b %d, %Y")
        ),
    });

    reminders.retain(|reminder| reminder.scheduled_for >= today);
    reminders
}
