use std::sync::Arc;

use chrono::Datelike;
use tracing::debug;

use crate::{
    core::{
        clock::Clock,
        repositories::{BudgetRepository, ExpenseRepository},
    },
    domain::{Category, Expense, Identifiable},
};

use super::{invalid, validate_amount, validate_month, ServiceResult};

/// User input for a new expense. The category is still raw text at this point.
#[derive(Debug, Clone, Copy)]
pub struct NewExpense<'a> {
    pub description: &'a str,
    pub amount: f64,
    pub category: &'a str,
}

/// Outcome of [`ExpenseService::add`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddedExpense {
    pub expense: Expense,
    /// Budget left for the current month after this expense, `None` when the month has
    /// no budget.
    pub remaining: Option<f64>,
}

impl AddedExpense {
    /// How far spending went past the monthly budget once nothing is left of it.
    ///
    /// A budget spent down to exactly zero counts as exhausted and yields `Some(0.0)`.
    pub fn overspent(&self) -> Option<f64> {
        self.remaining.filter(|left| *left <= 0.0).map(f64::abs)
    }
}

/// Optional month and category narrowing for list and summary queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub month: Option<u32>,
    pub category: Option<Category>,
}

impl ExpenseFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Validates the month range and parses the category name.
    pub fn parse(month: Option<u32>, category: Option<&str>) -> ServiceResult<Self> {
        let month = month.map(validate_month).transpose()?;
        let category = category
            .map(|name| name.parse::<Category>())
            .transpose()?;
        Ok(Self { month, category })
    }

    pub fn is_empty(&self) -> bool {
        self.month.is_none() && self.category.is_none()
    }
}

pub struct ExpenseService {
    expenses: Arc<ExpenseRepository>,
    budgets: Arc<BudgetRepository>,
    clock: Arc<dyn Clock>,
}

impl ExpenseService {
    pub fn new(
        expenses: Arc<ExpenseRepository>,
        budgets: Arc<BudgetRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            expenses,
            budgets,
            clock,
        }
    }

    /// Records a new expense dated today and reports what is left of this month's budget.
    ///
    /// The save and the budget lookup use separate collection locks, so a budget change
    /// landing between the two calls may or may not be reflected in `remaining`.
    pub fn add(&self, input: NewExpense<'_>) -> ServiceResult<AddedExpense> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(invalid("description must not be empty".into()));
        }
        let amount = validate_amount(input.amount)?;
        let category = input.category.parse::<Category>()?;

        let today = self.clock.today();
        let expense = self
            .expenses
            .save(Expense::new(description, amount, category, today))?;

        let remaining = match self.budgets.find_by_month_and_year(today.month(), today.year())? {
            Some(budget) => {
                let spent = self.expenses.summary_by_month(today.month())?;
                Some(budget.amount - spent)
            }
            None => None,
        };
        debug!(id = expense.id(), ?remaining, "expense added");
        Ok(AddedExpense { expense, remaining })
    }

    pub fn list(&self, filter: ExpenseFilter) -> ServiceResult<Vec<Expense>> {
        let expenses = match (filter.month, filter.category) {
            (None, None) => self.expenses.find_all()?,
            (Some(month), None) => self.expenses.find_by_month(month)?,
            (None, Some(category)) => self.expenses.find_by_category(category)?,
            (Some(month), Some(category)) => {
                self.expenses.find_by_month_and_category(month, category)?
            }
        };
        Ok(expenses)
    }

    pub fn summary(&self, filter: ExpenseFilter) -> ServiceResult<f64> {
        let total = match (filter.month, filter.category) {
            (None, None) => self.expenses.summary_all()?,
            (Some(month), None) => self.expenses.summary_by_month(month)?,
            (None, Some(category)) => self.expenses.summary_by_category(category)?,
            (Some(month), Some(category)) => {
                self.expenses.summary_by_month_and_category(month, category)?
            }
        };
        Ok(total)
    }

    /// Deletes by id. `Ok(false)` means there was nothing to delete.
    pub fn delete(&self, id: u32) -> ServiceResult<bool> {
        if id == 0 {
            return Err(invalid("id must be a positive number".into()));
        }
        Ok(self.expenses.delete_by_id(id)?)
    }
}
