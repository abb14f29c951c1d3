use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One tracked menstrual occurrence belonging to a single owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub start_date: NaiveDate,
    /// End of bleeding; absent while the cycle entry is still open
    pub end_date: Option<NaiveDate>,
    /// Comma-delimited free text, e.g. "cramps, headache"
    pub symptoms: Option<String>,
    pub notes: Option<String>,
    /// Advance notice for the period reminder, in days
    pub notify_before_days: Option<u32>,
    pub notification_enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl CycleRecord {
    /// Days from start to end for completed records, None otherwise
    pub fn period_length_days(&self) -> Option<i64> {
        self.end_date.map(|end| (end - self.start_date).num_days())
    }

    /// Symptom entries split out of the free-text field
    pub fn symptom_list(&self) -> Vec<String> {
        split_symptoms(self.symptoms.as_deref())
    }
}

/// Split a comma-delimited symptom field, trimming whitespace and dropping
/// empty entries
pub fn split_symptoms(raw: Option<&str>) -> Vec<String> {
    raw.map(|text| {
        text.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Payload for creating or updating a cycle entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCycleRequest {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub symptoms: Option<String>,
    pub notes: Option<String>,
    pub notify_before_days: Option<u32>,
    #[serde(default)]
    pub notification_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(start: NaiveDate, end: Option<NaiveDate>) -> CycleRecord {
        CycleRecord {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            start_date: start,
            end_date: end,
            symptoms: None,
            notes: None,
            notify_before_days: None,
            notification_enabled: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn period_length_is_days_between_start_and_end() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

        assert_eq!(record(start, Some(end)).period_length_days(), Some(4));
        assert_eq!(record(start, None).period_length_days(), None);
    }

    #[test]
    fn split_symptoms_trims_and_drops_empty_entries() {
        let entries = split_symptoms(Some(" cramps , headache,, fatigue ,"));
        assert_eq!(entries, vec!["cramps", "headache", "fatigue"]);
    }

    #[test]
    fn split_symptoms_handles_missing_field() {
        assert!(split_symptoms(None).is_empty());
        assert!(split_symptoms(Some("   ")).is_empty());
    }
}
