use std::sync::Arc;

use crate::{
    core::{clock::Clock, repositories::BudgetRepository},
    domain::Budget,
    errors::TrackerError,
};

use super::{validate_amount, validate_month, validate_year, ServiceResult};

/// Sets and reads monthly budgets. Missing month/year arguments default to today.
pub struct BudgetService {
    budgets: Arc<BudgetRepository>,
    clock: Arc<dyn Clock>,
}

impl BudgetService {
    pub fn new(budgets: Arc<BudgetRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { budgets, clock }
    }

    /// Sets the budget for `month` of `year` (current year when omitted), replacing any
    /// previous value for that month.
    pub fn set(&self, amount: f64, month: u32, year: Option<i32>) -> ServiceResult<Budget> {
        let amount = validate_amount(amount)?;
        let month = validate_month(month)?;
        let year = validate_year(year.unwrap_or_else(|| self.clock.current_year()))?;
        Ok(self.budgets.save(Budget::new(amount, month, year))?)
    }

    /// Returns the budget for the requested period, failing with `BudgetNotFound` when
    /// none was set.
    pub fn get(&self, month: Option<u32>, year: Option<i32>) -> ServiceResult<Budget> {
        let (month, year) = self.resolve_period(month, year)?;
        self.budgets
            .find_by_month_and_year(month, year)?
            .ok_or_else(|| TrackerError::BudgetNotFound { month, year }.into())
    }

    /// Budgets of one year (current year when omitted) ordered by month.
    pub fn for_year(&self, year: Option<i32>) -> ServiceResult<Vec<Budget>> {
        let year = validate_year(year.unwrap_or_else(|| self.clock.current_year()))?;
        let mut budgets = self.budgets.find_by_year(year)?;
        budgets.sort_by_key(|budget| budget.month);
        Ok(budgets)
    }

    /// Fills in today's month and year for missing arguments and validates both.
    pub fn resolve_period(&self, month: Option<u32>, year: Option<i32>) -> ServiceResult<(u32, i32)> {
        let month = validate_month(month.unwrap_or_else(|| self.clock.current_month()))?;
        let year = validate_year(year.unwrap_or_else(|| self.clock.current_year()))?;
        Ok((month, year))
    }
}
