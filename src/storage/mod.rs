pub mod json_backend;
pub mod lock;
pub mod memory;

use crate::errors::TrackerError;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Whole-collection persistence. Every call loads or replaces the full set of records,
/// so a backend only has to honour "what was stored last is what loads next".
pub trait CollectionStore<T>: Send + Sync {
    fn load(&self) -> Result<Vec<T>>;
    fn store(&self, records: &[T]) -> Result<()>;
    /// Human readable location, for logs and the `status` command.
    fn location(&self) -> String;
}

pub use json_backend::{read_collection, write_collection, JsonFileStore};
pub use lock::CollectionLock;
pub use memory::MemoryStore;
