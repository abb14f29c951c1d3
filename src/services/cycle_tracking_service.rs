use tracing::{info, warn};
use uuid::Uuid;

use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::error::{CycleError, CycleResult, StorageError};
use crate::models::{
    CreateCycleRequest, CycleAnalytics, CycleInsights, CycleLengthPoint, CyclePrediction,
    CycleRecord, CycleReminder, FertilityWindow, ValidationResult,
};
use crate::repository::{CycleRepository, ReminderSink};
use crate::services::{
    analytics_engine, cycle_predictor, cycle_validator, fertility_calculator, insight_generator,
    reminder_planner,
};

/// Thin async orchestration over the pure calculation components.
///
/// All statistics run over explicit history snapshots; this layer only does
/// the I/O around them, so it holds no state beyond its collaborators.
pub struct CycleTrackingService<R, S, C> {
    repository: R,
    reminder_sink: S,
    clock: C,
    config: EngineConfig,
}

impl<R, S, C> CycleTrackingService<R, S, C>
where
    R: CycleRepository,
    S: ReminderSink,
    C: Clock,
{
    pub fn new(repository: R, reminder_sink: S, clock: C, config: EngineConfig) -> Self {
        Self {
            repository,
            reminder_sink,
            clock,
            config,
        }
    }

    /// Dry-run validation for a prospective entry without persisting anything.
    /// Violations come back as data, never as an error.
    pub async fn validate_cycle(
        &self,
        owner_id: Uuid,
        request: &CreateCycleRequest,
    ) -> CycleResult<ValidationResult> {
        let history = self.load_history(owner_id, self.config.analytics_window_months).await?;
        let prior = most_recent(&history, None);
        Ok(cycle_validator::validate_cycle(request, prior, self.clock.today()))
    }

    /// Validate and persist a new cycle entry, then schedule reminders as a
    /// follow-up when notifications are enabled.
    pub async fn create_cycle(
        &self,
        owner_id: Uuid,
        request: CreateCycleRequest,
    ) -> CycleResult<CycleRecord> {
        let history = self.load_history(owner_id, self.config.analytics_window_months).await?;
        let prior = most_recent(&history, None);

        let validation = cycle_validator::validate_cycle(&request, prior, self.clock.today());
        if !validation.is_valid {
            info!(
                "Rejected cycle entry for owner {} with {} violations",
                owner_id,
                validation.violations.len()
            );
            return Err(CycleError::Validation(validation));
        }

        let record = CycleRecord {
            id: Uuid::new_v4(),
            owner_id,
            start_date: request.start_date,
            end_date: request.end_date,
            symptoms: request.symptoms,
            notes: request.notes,
            notify_before_days: request.notify_before_days,
            notification_enabled: request.notification_enabled,
            created_at: self.clock.now(),
        };
        let id = self.repository.save(&record).await?;
        info!("Saved cycle entry {} for owner {}", id, owner_id);

        if record.notification_enabled {
            // Follow-up task: a scheduling failure must not undo the saved
            // record, so it is logged and left for the caller to re-run
            if let Err(e) = self.schedule_reminders(owner_id, &record).await {
                warn!(
                    "Reminder scheduling failed for owner {} after cycle {} was saved: {}",
                    owner_id, id, e
                );
            }
        }

        Ok(record)
    }

    /// Re-validate and persist changes to an existing entry
    pub async fn update_cycle(
        &self,
        owner_id: Uuid,
        cycle_id: Uuid,
        request: CreateCycleRequest,
    ) -> CycleResult<CycleRecord> {
        let history = self.load_history(owner_id, self.config.analytics_window_months).await?;
        let existing = history
            .iter()
            .find(|r| r.id == cycle_id)
            .ok_or_else(|| StorageError::NotFound(format!("cycle {}", cycle_id)))?;

        let prior = most_recent(&history, Some(cycle_id));
        let validation = cycle_validator::validate_cycle(&request, prior, self.clock.today());
        if !validation.is_valid {
            return Err(CycleError::Validation(validation));
        }

        let updated = CycleRecord {
            id: existing.id,
            owner_id: existing.owner_id,
            start_date: request.start_date,
            end_date: request.end_date,
            symptoms: request.symptoms,
            notes: request.notes,
            notify_before_days: request.notify_before_days,
            notification_enabled: request.notification_enabled,
            created_at: existing.created_at,
        };
        self.repository.save(&updated).await?;
        info!("Updated cycle entry {} for owner {}", cycle_id, owner_id);

        if updated.notification_enabled {
            if let Err(e) = self.schedule_reminders(owner_id, &updated).await {
                warn!(
                    "Reminder scheduling failed for owner {} after cycle {} was updated: {}",
                    owner_id, cycle_id, e
                );
            }
        }

        Ok(updated)
    }

    /// Forecast the next period window from the prediction history window
    pub async fn predict_next_cycle(&self, owner_id: Uuid) -> CycleResult<CyclePrediction> {
        let history = self.load_history(owner_id, self.config.prediction_window_months).await?;
        cycle_predictor::predict_next_cycle(&history)
    }

    /// Ovulation estimate and fertile window, propagating predictor failures
    pub async fn get_fertility_window(&self, owner_id: Uuid) -> CycleResult<FertilityWindow> {
        let prediction = self.predict_next_cycle(owner_id).await?;
        Ok(fertility_calculator::fertility_window(
            &prediction,
            self.clock.today(),
        ))
    }

    /// Aggregated analytics over the trailing analytics window
    pub async fn get_cycle_analytics(&self, owner_id: Uuid) -> CycleResult<CycleAnalytics> {
        let history = self.load_history(owner_id, self.config.analytics_window_months).await?;
        analytics_engine::cycle_analytics(&history)
    }

    /// Qualitative insights derived from the analytics
    pub async fn get_cycle_insights(&self, owner_id: Uuid) -> CycleResult<CycleInsights> {
        let analytics = self.get_cycle_analytics(owner_id).await?;
        Ok(insight_generator::cycle_insights(&analytics))
    }

    /// Per-completed-cycle series over a caller-bounded window, for charting
    pub async fn get_cycle_trends(
        &self,
        owner_id: Uuid,
        months_back: u32,
    ) -> CycleResult<Vec<CycleLengthPoint>> {
        let history = self.load_history(owner_id, months_back).await?;
        Ok(analytics_engine::trend_points(&history))
    }

    /// Raw history passthrough for a caller-bounded window
    pub async fn get_cycle_history(
        &self,
        owner_id: Uuid,
        months_back: u32,
    ) -> CycleResult<Vec<CycleRecord>> {
        self.load_history(owner_id, months_back).await
    }

    /// Derive reminder content from a fresh prediction and push it to the
    /// delivery layer, retrying with backoff.
    ///
    /// Runs as a follow-up to cycle creation so a scheduling failure never
    /// invalidates the stored record; callers can invoke it again afterwards.
    /// Without enough history the follow-up is skipped rather than scheduled
    /// from a made-up prediction.
    pub async fn schedule_reminders(
        &self,
        owner_id: Uuid,
        record: &CycleRecord,
    ) -> CycleResult<Vec<CycleReminder>> {
        if !record.notification_enabled {
            return Ok(Vec::new());
        }

        let history = self.load_history(owner_id, self.config.prediction_window_months).await?;
        let prediction = match cycle_predictor::predict_next_cycle(&history) {
            Ok(prediction) => prediction,
            Err(CycleError::InsufficientData) => {
                info!("Not enough history to schedule reminders for owner {}", owner_id);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let today = self.clock.today();
        let window = fertility_calculator::fertility_window(&prediction, today);
        let reminders = reminder_planner::plan_reminders(record, &prediction, &window, today);
        if reminders.is_empty() {
            return Ok(reminders);
        }

        self.config
            .reminder_retry
            .execute(|| self.reminder_sink.schedule(owner_id, &reminders))
            .await?;

        info!("Scheduled {} reminders for owner {}", reminders.len(), owner_id);
        Ok(reminders)
    }

    async fn load_history(&self, owner_id: Uuid, months_back: u32) -> CycleResult<Vec<CycleRecord>> {
        Ok(self.repository.history(owner_id, months_back).await?)
    }
}

/// Most recent record by start date, optionally ignoring one id (for updates)
fn most_recent(history: &[CycleRecord], skip_id: Option<Uuid>) -> Option<&CycleRecord> {
    history
        .iter()
        .filter(|r| skip_id != Some(r.id))
        .max_by_key(|r| r.start_date)
}
