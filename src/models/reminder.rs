use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cycle phase a reminder is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
}

impl CyclePhase {
    /// Display title the delivery layer puts on the notification
    pub fn title(&self) -> &'static str {
        match self {
            CyclePhase::Menstrual => "Period Reminder",
            CyclePhase::Follicular => "Fertility Window",
            CyclePhase::Ovulation => "Ovulation Reminder",
            CyclePhase::Luteal => "Cycle Update",
        }
    }

    pub fn priority(&self) -> ReminderPriority {
        match self {
            CyclePhase::Menstrual => ReminderPriority::High,
            CyclePhase::Follicular => ReminderPriority::Medium,
            CyclePhase::Ovulation => ReminderPriority::Medium,
            CyclePhase::Luteal => ReminderPriority::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderPriority {
    Low,
    Medium,
    High,
}

/// Reminder content handed to the delivery-layer scheduler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReminder {
    pub phase: CyclePhase,
    pub scheduled_for: NaiveDate,
    pub message: String,
}
