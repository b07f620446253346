//! Repositories, services and the wiring that ties them to on-disk paths.

pub mod clock;
pub mod repositories;
pub mod services;
pub mod tracker;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use tracker::Tracker;
