//! Expense Tracker - personal expense tracking backed by SQLite
//!
//! This library provides the core of the expense tracker: a record store for
//! expenses and categories, validation and normalization of user input, and
//! filtering over stored expenses. A thin CLI sits on top of it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, ids)
//! - `storage`: SQLite record store
//! - `services`: Validation, normalization and filtering
//! - `export`: CSV and SQLite export
//! - `reports`: Spending summaries by category and month
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::services::{AddExpenseInput, ExpenseService};
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::open_in_memory()?;
//! let service = ExpenseService::new(&storage);
//! service.add(&AddExpenseInput {
//!     amount: "12.50".into(),
//!     category: "Food".into(),
//!     date: "2024-06-21".into(),
//!     description: None,
//! })?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
