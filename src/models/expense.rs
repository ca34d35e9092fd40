//! Expense model
//!
//! An expense is immutable once stored. [`NewExpense`] is the validated,
//! normalized value handed to the store; [`Expense`] is what comes back out
//! with its store-assigned id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// Canonical textual form of every stored date
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated expense that has not been written yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// Amount spent, finite and non-negative
    pub amount: f64,

    /// Category name (not required to exist in the category set)
    pub category: String,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewExpense {
    /// Date in canonical storage form (`YYYY-MM-DD`)
    pub fn date_string(&self) -> String {
        self.date.format(CANONICAL_DATE_FORMAT).to_string()
    }
}

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier, monotonically increasing
    pub id: ExpenseId,

    /// Amount spent
    pub amount: f64,

    /// Category name
    pub category: String,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Expense {
    /// Attach a store-assigned id to a validated expense
    pub fn from_new(id: ExpenseId, new: NewExpense) -> Self {
        Self {
            id,
            amount: new.amount,
            category: new.category,
            date: new.date,
            description: new.description,
        }
    }

    /// Date in canonical storage form (`YYYY-MM-DD`)
    pub fn date_string(&self) -> String {
        self.date.format(CANONICAL_DATE_FORMAT).to_string()
    }

    /// Description, or an empty string when absent
    pub fn description_str(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {:.2} {}",
            self.id,
            self.date_string(),
            self.amount,
            self.category
        )
    }
}
