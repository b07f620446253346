use std::sync::{Mutex, PoisonError};

use crate::errors::TrackerError;

use super::{CollectionStore, Result};

/// Volatile collection store. Used in tests and when persistence is not wanted.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
    fail_writes: bool,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_writes: false,
        }
    }

    /// A store whose writes always fail, for exercising error propagation.
    pub fn read_only(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_writes: true,
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionStore<T> for MemoryStore<T>
where
    T: Clone + Send,
{
    fn load(&self) -> Result<Vec<T>> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.clone())
    }

    fn store(&self, records: &[T]) -> Result<()> {
        if self.fail_writes {
            return Err(TrackerError::Storage("memory store is read-only".into()));
        }
        let mut current = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        *current = records.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".into()
    }
}
