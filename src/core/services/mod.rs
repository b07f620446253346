//! Application services: one repository round trip per user command, plus input
//! validation and the cross-collection budget arithmetic.

pub mod budget_service;
pub mod expense_service;

pub use budget_service::BudgetService;
pub use expense_service::{AddedExpense, ExpenseFilter, ExpenseService, NewExpense};

use crate::errors::TrackerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("{0}")]
    Invalid(String),
}

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

pub(crate) fn validate_month(month: u32) -> ServiceResult<u32> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(invalid(format!("month must be between 1 and 12, got {month}")))
    }
}

pub(crate) fn validate_year(year: i32) -> ServiceResult<i32> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(invalid(format!(
            "year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
        )))
    }
}

pub(crate) fn validate_amount(amount: f64) -> ServiceResult<f64> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(invalid(format!("amount must be a positive number, got {amount}")))
    }
}

fn invalid(message: String) -> ServiceError {
    tracing::warn!(%message, "input rejected");
    ServiceError::Invalid(message)
}

#[cfg(test)]
mod tests;
