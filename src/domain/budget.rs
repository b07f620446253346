use serde::{Deserialize, Serialize};

use crate::domain::common::Amounted;

/// Spending target for one calendar month. `(month, year)` is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub amount: f64,
    pub month: u32,
    pub year: i32,
}

impl Budget {
    pub fn new(amount: f64, month: u32, year: i32) -> Self {
        Self {
            amount,
            month,
            year,
        }
    }

    pub fn is_for(&self, month: u32, year: i32) -> bool {
        self.month == month && self.year == year
    }

    pub fn same_period(&self, other: &Budget) -> bool {
        self.is_for(other.month, other.year)
    }

    /// `MM/YYYY` label used in messages.
    pub fn period_label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}

impl Amounted for Budget {
    fn amount(&self) -> f64 {
        self.amount
    }
}
