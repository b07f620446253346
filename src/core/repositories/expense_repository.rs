//! File-backed expense collection with in-process id assignment.

use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
};

use tracing::{debug, info};

use crate::{
    core::clock::Clock,
    domain::{common::total, Category, Expense, Identifiable},
    errors::{Result, TrackerError},
    storage::{CollectionLock, CollectionStore, JsonFileStore},
};

/// Owns the expense collection and its id high-water mark.
///
/// Every operation loads the full collection under the collection lock. Mutations
/// rewrite the full collection before releasing the write lock.
pub struct ExpenseRepository {
    store: Box<dyn CollectionStore<Expense>>,
    lock: CollectionLock,
    // Only written while `lock` is held for writing.
    high_water: AtomicU32,
    clock: Arc<dyn Clock>,
}

impl ExpenseRepository {
    /// Builds the repository and seeds the high-water mark from the stored ids.
    pub fn new(store: Box<dyn CollectionStore<Expense>>, clock: Arc<dyn Clock>) -> Result<Self> {
        let existing = store.load()?;
        let max_id = existing.iter().map(Identifiable::id).max().unwrap_or(0);
        debug!(
            location = %store.location(),
            records = existing.len(),
            max_id,
            "expense repository opened"
        );
        Ok(Self {
            store,
            lock: CollectionLock::new(),
            high_water: AtomicU32::new(max_id),
            clock,
        })
    }

    /// Opens the JSON collection at `path`.
    pub fn open(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Result<Self> {
        Self::new(Box::new(JsonFileStore::new(path)), clock)
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Largest id handed out so far (or found at start-up).
    pub fn high_water_mark(&self) -> u32 {
        self.lock.read(|| self.high_water.load(Ordering::SeqCst))
    }

    /// Inserts or replaces `expense` and returns the stored copy.
    ///
    /// A non-zero id that matches a stored record replaces it in its slot, keeping the
    /// original creation date and stamping `updated_at`. Anything else is a create and
    /// receives the next id.
    pub fn save(&self, mut expense: Expense) -> Result<Expense> {
        self.lock.write(|| {
            let mut expenses = self.store.load()?;
            let existing = if expense.is_unassigned() {
                None
            } else {
                expenses.iter().position(|stored| stored.id() == expense.id())
            };

            match existing {
                Some(index) => {
                    expense.replace(&expenses[index], self.clock.today());
                    expenses[index] = expense.clone();
                    self.store.store(&expenses)?;
                    info!(id = expense.id(), "expense updated");
                }
                None => {
                    let id = self
                        .high_water
                        .load(Ordering::SeqCst)
                        .checked_add(1)
                        .ok_or_else(|| {
                            TrackerError::Storage(format!(
                                "expense ids exhausted in {}",
                                self.store.location()
                            ))
                        })?;
                    expense.assign_id(id);
                    expenses.push(expense.clone());
                    self.store.store(&expenses)?;
                    self.high_water.store(id, Ordering::SeqCst);
                    info!(id, category = %expense.category, "expense created");
                }
            }
            Ok(expense)
        })
    }

    pub fn find_by_id(&self, id: u32) -> Result<Option<Expense>> {
        self.lock.read(|| {
            let expenses = self.store.load()?;
            Ok(expenses.into_iter().find(|expense| expense.id() == id))
        })
    }

    pub fn exists_by_id(&self, id: u32) -> Result<bool> {
        self.lock.read(|| {
            let expenses = self.store.load()?;
            Ok(expenses.iter().any(|expense| expense.id() == id))
        })
    }

    pub fn find_all(&self) -> Result<Vec<Expense>> {
        self.lock.read(|| self.store.load())
    }

    /// Expenses created in `month` (1-12) of any year.
    pub fn find_by_month(&self, month: u32) -> Result<Vec<Expense>> {
        self.filtered(|expense| expense.month() == month)
    }

    pub fn find_by_category(&self, category: Category) -> Result<Vec<Expense>> {
        self.filtered(|expense| expense.category == category)
    }

    pub fn find_by_month_and_category(
        &self,
        month: u32,
        category: Category,
    ) -> Result<Vec<Expense>> {
        self.filtered(|expense| expense.month() == month && expense.category == category)
    }

    pub fn count(&self) -> Result<usize> {
        self.lock.read(|| Ok(self.store.load()?.len()))
    }

    pub fn summary_all(&self) -> Result<f64> {
        self.summed(|_| true)
    }

    pub fn summary_by_month(&self, month: u32) -> Result<f64> {
        self.summed(|expense| expense.month() == month)
    }

    pub fn summary_by_category(&self, category: Category) -> Result<f64> {
        self.summed(|expense| expense.category == category)
    }

    pub fn summary_by_month_and_category(&self, month: u32, category: Category) -> Result<f64> {
        self.summed(|expense| expense.month() == month && expense.category == category)
    }

    /// Removes the expense with `id`. Returns whether a record was removed.
    pub fn delete_by_id(&self, id: u32) -> Result<bool> {
        self.lock.write(|| {
            let mut expenses = self.store.load()?;
            let before = expenses.len();
            expenses.retain(|expense| expense.id() != id);
            let removed = expenses.len() != before;
            self.store.store(&expenses)?;
            if removed {
                info!(id, "expense deleted");
            } else {
                debug!(id, "no expense to delete");
            }
            Ok(removed)
        })
    }

    /// Empties the collection and restarts id assignment at 1.
    pub fn delete_all(&self) -> Result<()> {
        self.lock.write(|| {
            self.store.store(&[])?;
            self.high_water.store(0, Ordering::SeqCst);
            info!("all expenses deleted");
            Ok(())
        })
    }

    fn filtered(&self, predicate: impl Fn(&Expense) -> bool) -> Result<Vec<Expense>> {
        self.lock.read(|| {
            let expenses = self.store.load()?;
            Ok(expenses.into_iter().filter(|expense| predicate(expense)).collect())
        })
    }

    fn summed(&self, predicate: impl Fn(&Expense) -> bool) -> Result<f64> {
        self.lock.read(|| {
            let expenses = self.store.load()?;
            Ok(total(expenses.iter().filter(|expense| predicate(*expense))))
        })
    }
}
