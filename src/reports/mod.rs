//! Reports module
//!
//! Aggregates for the chart side of the application:
//! - Spending by category (distribution)
//! - Spending by month

pub mod spending;

pub use spending::{
    spending_by_category, spending_by_month, CategorySpending, MonthlySpending, SpendingReport,
};
