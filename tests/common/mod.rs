#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use chrono::NaiveDate;
use expense_tracker::core::{
    repositories::{BudgetRepository, ExpenseRepository},
    Clock, FixedClock,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn clock_on(year: i32, month: u32, day: u32) -> Arc<dyn Clock> {
    Arc::new(FixedClock(date(year, month, day)))
}

/// A fresh directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens both collections under `base` with their default file names.
pub fn open_repositories(
    base: &Path,
    clock: Arc<dyn Clock>,
) -> (ExpenseRepository, BudgetRepository) {
    let expenses =
        ExpenseRepository::open(base.join("expense.json"), clock).expect("open expense repository");
    let budgets = BudgetRepository::open(base.join("config.json"));
    (expenses, budgets)
}

/// Creates isolated repositories backed by a unique directory for each test.
pub fn setup_test_env() -> (PathBuf, ExpenseRepository, BudgetRepository) {
    let base = temp_base();
    let (expenses, budgets) = open_repositories(&base, clock_on(2025, 6, 20));
    (base, expenses, budgets)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
