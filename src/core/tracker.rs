use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::info;

use crate::{
    config::Config,
    errors::Result,
};

use super::{
    clock::Clock,
    repositories::{BudgetRepository, ExpenseRepository},
    services::{BudgetService, ExpenseService},
    utils::ensure_dir,
};

/// Both collections of one data directory plus the services built over them.
pub struct Tracker {
    base: PathBuf,
    expenses: Arc<ExpenseRepository>,
    budgets: Arc<BudgetRepository>,
    expense_service: ExpenseService,
    budget_service: BudgetService,
}

impl Tracker {
    /// Opens the collections named by `config` inside `base`, creating the directory if
    /// needed. Fails when the expense file exists but cannot be read.
    pub fn open(base: impl AsRef<Path>, config: &Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let base = base.as_ref().to_path_buf();
        ensure_dir(&base)?;
        let expenses = ExpenseRepository::open(config.expense_path_in(&base), clock.clone())?;
        let budgets = BudgetRepository::open(config.budget_path_in(&base));
        info!(base = %base.display(), "tracker opened");
        Ok(Self::from_parts(base, expenses, budgets, clock))
    }

    pub fn from_parts(
        base: PathBuf,
        expenses: ExpenseRepository,
        budgets: BudgetRepository,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let expenses = Arc::new(expenses);
        let budgets = Arc::new(budgets);
        Self {
            expense_service: ExpenseService::new(expenses.clone(), budgets.clone(), clock.clone()),
            budget_service: BudgetService::new(budgets.clone(), clock),
            base,
            expenses,
            budgets,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn expenses(&self) -> &ExpenseService {
        &self.expense_service
    }

    pub fn budgets(&self) -> &BudgetService {
        &self.budget_service
    }

    pub fn expense_repository(&self) -> &Arc<ExpenseRepository> {
        &self.expenses
    }

    pub fn budget_repository(&self) -> &Arc<BudgetRepository> {
        &self.budgets
    }
}
