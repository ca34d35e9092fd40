//! Service layer for the expense tracker
//!
//! The service layer provides validation, normalization and filtering on top
//! of the storage layer.

pub mod category;
pub mod expense;
pub mod filter;
pub mod validation;

pub use category::CategoryService;
pub use expense::{AddExpenseInput, ExpenseService};
pub use filter::{filter_expenses, ExpenseFilter, FilterInput, ALL_CATEGORIES};
pub use validation::{
    normalize_date, parse_amount, validate_and_normalize_expense, ExpenseValidator,
};
