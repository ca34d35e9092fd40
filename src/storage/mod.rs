//! Storage layer for the expense tracker
//!
//! A single SQLite file holds the `expenses` and `categories` tables. The
//! [`Storage`] value owns the connection for the lifetime of the process;
//! dropping it (or calling [`Storage::close`]) releases the connection.
//! Callers always receive owned snapshots of rows, never live handles.

pub mod categories;
pub mod expenses;
pub mod schema;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use schema::initialize_schema;

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::{debug, error, info, warn};

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{self, ExportFormat};
use crate::models::{Category, Expense, NewExpense};

/// The record store: owns the database connection
pub struct Storage {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Storage {
    /// Open (creating if needed) the database under the configured paths
    pub fn new(paths: &ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        Self::open(paths.database_file())
    }

    /// Open (creating if needed) the database at a specific file
    pub fn open<P: AsRef<Path>>(path: P) -> ExpenseResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "failed to open database");
            ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        initialize_schema(&conn)?;
        debug!(path = %path.display(), "database opened");

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a private in-memory database (useful for testing)
    pub fn open_in_memory() -> ExpenseResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Path of the database file, if file-backed
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Expense repository
    pub fn expenses(&self) -> ExpenseRepository<'_> {
        ExpenseRepository::new(&self.conn)
    }

    /// Category repository
    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(&self.conn)
    }

    /// Insert one validated expense; it is committed when this returns `Ok`
    pub fn add_expense(&self, expense: &NewExpense) -> ExpenseResult<Expense> {
        let stored = self.expenses().insert(expense).map_err(|e| {
            error!(error = %e, "failed to add expense");
            e
        })?;
        info!(id = %stored.id, category = %stored.category, "expense added");
        Ok(stored)
    }

    /// Full snapshot of expenses in insertion order
    pub fn get_expenses(&self) -> ExpenseResult<Vec<Expense>> {
        self.expenses().get_all().map_err(|e| {
            error!(error = %e, "failed to read expenses");
            e
        })
    }

    /// Expenses in insertion order, skipping rows that cannot be decoded.
    /// Each skipped row is logged; failing to query at all is still an error.
    pub fn get_expenses_skipping_malformed(&self) -> ExpenseResult<Vec<Expense>> {
        let rows = self.expenses().get_all_rows().map_err(|e| {
            error!(error = %e, "failed to read expenses");
            e
        })?;

        let mut expenses = Vec::with_capacity(rows.len());
        for row in rows {
            match row {
                Ok(expense) => expenses.push(expense),
                Err(e) => warn!(error = %e, "skipping malformed expense row"),
            }
        }
        Ok(expenses)
    }

    /// Add a category; an existing name is reported as
    /// [`ExpenseError::CategoryExists`] and nothing is written
    pub fn add_category(&self, name: &str) -> ExpenseResult<Category> {
        match self.categories().insert(name) {
            Ok(category) => {
                info!(name = %category.name, "category added");
                Ok(category)
            }
            Err(e) if e.is_category_exists() => {
                warn!(name = %name, "category already exists");
                Err(e)
            }
            Err(e) => {
                error!(name = %name, error = %e, "failed to add category");
                Err(e)
            }
        }
    }

    /// Remove a category by name. Expenses recorded under it keep their
    /// category text. Returns `false` when no such category existed.
    pub fn remove_category(&self, name: &str) -> ExpenseResult<bool> {
        let removed = self.categories().delete_by_name(name).map_err(|e| {
            error!(name = %name, error = %e, "failed to remove category");
            e
        })?;
        if removed {
            info!(name = %name, "category removed");
        } else {
            debug!(name = %name, "remove of unknown category ignored");
        }
        Ok(removed)
    }

    /// Distinct category names in insertion order
    pub fn get_categories(&self) -> ExpenseResult<Vec<String>> {
        self.categories().get_names().map_err(|e| {
            error!(error = %e, "failed to read categories");
            e
        })
    }

    /// Export the current expenses to `destination` in the given format
    pub fn export(&self, format: ExportFormat, destination: &Path) -> ExpenseResult<usize> {
        export::export_to_path(self, format, destination)
    }

    /// Close the connection, reporting any failure
    pub fn close(self) -> ExpenseResult<()> {
        self.conn.close().map_err(|(_, e)| {
            error!(error = %e, "failed to close database");
            ExpenseError::from(e)
        })
    }
}
