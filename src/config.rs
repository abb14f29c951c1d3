use anyhow::Result;
use std::env;

use crate::retry::RetryConfig;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Trailing history window fed to the predictor, in months
    pub prediction_window_months: u32,
    /// Trailing history window fed to the analytics engine, in months
    pub analytics_window_months: u32,
    /// Retry policy for the reminder follow-up task
    pub reminder_retry: RetryConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prediction_window_months: 6,
            analytics_window_months: 12,
            reminder_retry: RetryConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let prediction_window_months = env::var("PREDICTION_WINDOW_MONTHS")
            .unwrap_or_else(|_| "6".to_string())
            .parse()?;
        let analytics_window_months = env::var("ANALYTICS_WINDOW_MONTHS")
            .unwrap_or_else(|_| "12".to_string())
            .parse()?;
        let max_attempts = env::var("REMINDER_RETRY_ATTEMPTS")
            .unwrap_or_else(|_| "3".to_string())
            .parse()?;

        Ok(Self {
            prediction_window_months,
            analytics_window_months,
            reminder_retry: RetryConfig {
                max_attempts,
                ..RetryConfig::default()
            },
        })
    }
}
