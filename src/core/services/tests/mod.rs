mod expense_service_tests;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::core::{
    clock::{Clock, FixedClock},
    repositories::{BudgetRepository, ExpenseRepository},
    services::{BudgetService, ExpenseService},
};
use crate::domain::{Budget, Expense};
use crate::storage::MemoryStore;

pub(super) struct Fixture {
    pub expenses: Arc<ExpenseRepository>,
    pub budgets: Arc<BudgetRepository>,
    pub expense_service: ExpenseService,
    pub budget_service: BudgetService,
}

/// In-memory services pinned to `today`.
pub(super) fn fixture(today: NaiveDate) -> Fixture {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(today));
    let expenses = Arc::new(
        ExpenseRepository::new(Box::new(MemoryStore::<Expense>::new()), Arc::clone(&clock))
            .expect("open expense repository"),
    );
    let budgets = Arc::new(BudgetRepository::new(Box::new(MemoryStore::<Budget>::new())));
    Fixture {
        expense_service: ExpenseService::new(
            Arc::clone(&expenses),
            Arc::clone(&budgets),
            Arc::clone(&clock),
        ),
        budget_service: BudgetService::new(Arc::clone(&budgets), clock),
        expenses,
        budgets,
    }
}

pub(super) fn june_20() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
}
