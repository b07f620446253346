//! File-backed budget collection keyed by `(month, year)`.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    domain::Budget,
    errors::Result,
    storage::{CollectionLock, CollectionStore, JsonFileStore},
};

pub struct BudgetRepository {
    store: Box<dyn CollectionStore<Budget>>,
    lock: CollectionLock,
}

impl BudgetRepository {
    pub fn new(store: Box<dyn CollectionStore<Budget>>) -> Self {
        debug!(location = %store.location(), "budget repository opened");
        Self {
            store,
            lock: CollectionLock::new(),
        }
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(JsonFileStore::new(path)))
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Upserts `budget`: any stored budget for the same month and year is replaced whole.
    pub fn save(&self, budget: Budget) -> Result<Budget> {
        self.lock.write(|| {
            let mut budgets = self.store.load()?;
            let before = budgets.len();
            budgets.retain(|stored| !stored.same_period(&budget));
            let replaced = budgets.len() != before;
            budgets.push(budget.clone());
            self.store.store(&budgets)?;
            info!(
                period = %budget.period_label(),
                amount = budget.amount,
                replaced,
                "budget saved"
            );
            Ok(budget)
        })
    }

    pub fn find_by_month_and_year(&self, month: u32, year: i32) -> Result<Option<Budget>> {
        self.lock.read(|| {
            let budgets = self.store.load()?;
            Ok(budgets.into_iter().find(|budget| budget.is_for(month, year)))
        })
    }

    pub fn find_by_year(&self, year: i32) -> Result<Vec<Budget>> {
        self.lock.read(|| {
            let budgets = self.store.load()?;
            Ok(budgets
                .into_iter()
                .filter(|budget| budget.year == year)
                .collect())
        })
    }

    pub fn find_all(&self) -> Result<Vec<Budget>> {
        self.lock.read(|| self.store.load())
    }

    pub fn delete_by_month_and_year(&self, month: u32, year: i32) -> Result<()> {
        self.lock.write(|| {
            let mut budgets = self.store.load()?;
            budgets.retain(|budget| !budget.is_for(month, year));
            self.store.store(&budgets)?;
            info!(month, year, "budget deleted");
            Ok(())
        })
    }

    pub fn delete_all(&self) -> Result<()> {
        self.lock.write(|| {
            self.store.store(&[])?;
            info!("all budgets deleted");
            Ok(())
        })
    }

    pub fn count(&self) -> Result<usize> {
        self.lock.read(|| Ok(self.store.load()?.len()))
    }
}
