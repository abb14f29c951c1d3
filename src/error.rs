use thiserror::Error;

use crate::models::ValidationResult;

/// Result type for engine operations
pub type CycleResult<T> = Result<T, CycleError>;

/// Errors surfaced by the cycle tracking engine
#[derive(Error, Debug)]
pub enum CycleError {
    /// Business-rule violations for a submitted cycle entry, carried as data
    #[error("cycle entry failed validation: {}", .0.violations.join("; "))]
    Validation(ValidationResult),

    /// History is empty or contains no plausible intervals
    #[error("not enough cycle history to compute a reliable result")]
    InsufficientData,

    /// An external collaborator (repository or reminder sink) failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Failure reported by a repository or reminder sink implementation
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationResult;

    #[test]
    fn validation_error_lists_every_violation() {
        let result = ValidationResult::from_violations(vec![
            "first rule broken".to_string(),
            "second rule broken".to_string(),
        ]);

        let error = CycleError::Validation(result);
        let message = error.to_string();

        assert!(message.contains("first rule broken"));
        assert!(message.contains("second rule broken"));
    }

    #[test]
    fn storage_error_converts_into_cycle_error() {
        let error: CycleError = StorageError::Query("timeout".to_string()).into();
        assert!(matches!(error, CycleError::Storage(_)));
    }
}
