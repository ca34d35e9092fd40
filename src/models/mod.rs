//! Core data models for the expense tracker
//!
//! Expenses and categories as they travel between the validation layer,
//! the store, and the presentation side.

pub mod category;
pub mod expense;
pub mod ids;

pub use category::Category;
pub use expense::{Expense, NewExpense, CANONICAL_DATE_FORMAT};
pub use ids::{CategoryId, ExpenseId};
