use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{
    category::Category,
    common::{Amounted, Identifiable},
};

/// Id carried by an expense that has not been persisted yet.
pub const UNASSIGNED_ID: u32 = 0;

/// A single spending record.
///
/// `id` and `updated_at` are owned by the repository; `created_at` is fixed at
/// construction. The remaining fields may be edited before re-saving.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    #[serde(rename = "expenseId")]
    id: u32,
    #[serde(rename = "createAt")]
    created_at: NaiveDate,
    #[serde(rename = "updatedAt", default)]
    updated_at: Option<NaiveDate>,
    pub description: String,
    pub amount: f64,
    pub category: Category,
}

impl Expense {
    /// Builds an unsaved expense dated `created_at`.
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: Category,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            created_at,
            updated_at: None,
            description: description.into(),
            amount,
            category,
        }
    }

    /// Rebuilds a record with every field supplied, as read back from storage.
    pub fn restore(
        id: u32,
        created_at: NaiveDate,
        updated_at: Option<NaiveDate>,
        description: impl Into<String>,
        amount: f64,
        category: Category,
    ) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            description: description.into(),
            amount,
            category,
        }
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<NaiveDate> {
        self.updated_at
    }

    pub fn is_unassigned(&self) -> bool {
        self.id == UNASSIGNED_ID
    }

    /// Month component (1-12) of the creation date.
    pub fn month(&self) -> u32 {
        self.created_at.month()
    }

    pub(crate) fn assign_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Marks this record as a replacement of `previous`: the creation date carries over
    /// and `updated_at` becomes `today`.
    pub(crate) fn replace(&mut self, previous: &Expense, today: NaiveDate) {
        self.created_at = previous.created_at;
        self.updated_at = Some(today);
    }
}

impl Identifiable for Expense {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}
