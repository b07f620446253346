use std::sync::{PoisonError, RwLock};

/// Reader/writer guard for one collection file.
///
/// The lock protects no data of its own; the file is the state. Callers pass the whole
/// read-compute-write sequence as a closure so it runs inside a single critical section.
#[derive(Debug, Default)]
pub struct CollectionLock {
    inner: RwLock<()>,
}

impl CollectionLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `work` while holding the shared lock. Other readers may run concurrently.
    pub fn read<R>(&self, work: impl FnOnce() -> R) -> R {
        // A panic in another critical section cannot corrupt `()`, so poisoning is ignored.
        let _guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        work()
    }

    /// Runs `work` while holding the exclusive lock.
    pub fn write<R>(&self, work: impl FnOnce() -> R) -> R {
        let _guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        work()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc, Barrier,
        },
        thread,
        time::Duration,
    };

    #[test]
    fn readers_overlap() {
        let lock = Arc::new(CollectionLock::new());
        let barrier = Arc::new(Barrier::new(2));
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let lock = Arc::clone(&lock);
                let barrier = Arc::clone(&barrier);
                // Both readers must be inside the lock at once to pass the barrier.
                thread::spawn(move || lock.read(|| barrier.wait()))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn writers_are_exclusive() {
        let lock = Arc::new(CollectionLock::new());
        let inside = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let lock = Arc::clone(&lock);
                let inside = Arc::clone(&inside);
                let max_seen = Arc::clone(&max_seen);
                thread::spawn(move || {
                    lock.write(|| {
                        let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                        max_seen.fetch_max(now, Ordering::SeqCst);
                        thread::sleep(Duration::from_millis(2));
                        inside.fetch_sub(1, Ordering::SeqCst);
                    })
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn survives_a_panicking_writer() {
        let lock = Arc::new(CollectionLock::new());
        let cloned = Arc::clone(&lock);
        let result = thread::spawn(move || cloned.write(|| panic!("boom"))).join();
        assert!(result.is_err());
        assert_eq!(lock.read(|| 7), 7);
    }
}
