use serde::{Deserialize, Serialize};

/// Outcome of the business-rule check for a submitted cycle entry.
/// Never persisted; violations keep the order the rules run in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<String>,
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<String>) -> Self {
        Self {
            is_valid: violations.is_empty(),
            violations,
        }
    }
}
