use chrono::{Datelike, Local, NaiveDate};

/// Source of "today" so repositories and services stay deterministic in tests.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    fn current_month(&self) -> u32 {
        self.today().month()
    }

    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Local wall-clock date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
