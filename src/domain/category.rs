//! Fixed set of expense categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Expense classification. Serialized with its upper-case enum name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Food,
    Fruits,
    InternetBill,
    TelephoneBill,
    ElectricityBill,
    // Older files spell this one in mixed case.
    #[serde(alias = "WATER_bill")]
    WaterBill,
    GasBill,
    Cleaning,
    Garbage,
    Debts,
    Other,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Food,
        Category::Fruits,
        Category::InternetBill,
        Category::TelephoneBill,
        Category::ElectricityBill,
        Category::WaterBill,
        Category::GasBill,
        Category::Cleaning,
        Category::Garbage,
        Category::Debts,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Fruits => "FRUITS",
            Category::InternetBill => "INTERNET_BILL",
            Category::TelephoneBill => "TELEPHONE_BILL",
            Category::ElectricityBill => "ELECTRICITY_BILL",
            Category::WaterBill => "WATER_BILL",
            Category::GasBill => "GAS_BILL",
            Category::Cleaning => "CLEANING",
            Category::Garbage => "GARBAGE",
            Category::Debts => "DEBTS",
            Category::Other => "OTHER",
        }
    }

    /// Comma separated list of every category name, for help and error text.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    /// Case-insensitive lookup by enum name.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| TrackerError::CategoryNotFound(value.trim().to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
