use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the storage, repository and service layers.
///
/// Absence is not an error at the repository layer; `BudgetNotFound` is raised only by
/// callers that require a budget to exist.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Budget not found for {month:02}/{year}")]
    BudgetNotFound { month: u32, year: i32 },
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl TrackerError {
    pub fn is_storage(&self) -> bool {
        matches!(self, TrackerError::Storage(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}
