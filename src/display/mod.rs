//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, categories and reports for
//! terminal display.

pub mod category;
pub mod expense;
pub mod report;

pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_table};
pub use report::{format_category_report, format_monthly_report};

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}
