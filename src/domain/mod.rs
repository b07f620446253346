//! Domain records persisted by the repositories. No I/O lives here.

pub mod budget;
pub mod category;
pub mod common;
pub mod expense;

pub use budget::Budget;
pub use category::Category;
pub use common::{Amounted, Identifiable};
pub use expense::Expense;
