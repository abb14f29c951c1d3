// Library exports for the cycle tracking engine
// This allows testing of internal modules

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod retry;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngineConfig;
pub use error::{CycleError, CycleResult, StorageError};
pub use repository::{CycleRepository, ReminderSink};
pub use retry::RetryConfig;
pub use services::CycleTrackingService;
