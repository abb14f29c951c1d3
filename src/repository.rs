use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{CycleRecord, CycleReminder};

/// Persistence seam for cycle records.
///
/// The engine never touches storage mechanics directly; implementations live
/// with the surrounding I/O layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CycleRepository: Send + Sync {
    /// Load one owner's records from the trailing window, ordered by start
    /// date ascending
    async fn history(
        &self,
        owner_id: Uuid,
        months_back: u32,
    ) -> Result<Vec<CycleRecord>, StorageError>;

    /// Insert or replace a record by id, returning its id
    async fn save(&self, record: &CycleRecord) -> Result<Uuid, StorageError>;
}

/// Intake of the external notification scheduler
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReminderSink: Send + Sync {
    /// Hand planned reminders to the delivery layer
    async fn schedule(
        &self,
        owner_id: Uuid,
        reminders: &[CycleReminder],
    ) -> Result<(), StorageError>;
}
