#![doc(test(attr(deny(warnings))))]

//! Personal expense tracking: expenses and monthly budgets kept in JSON files, with
//! repositories that serialize access per collection and assign expense ids in process.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("expense tracker tracing initialized");
    });
}
