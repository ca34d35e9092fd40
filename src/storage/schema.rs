//! Database schema
//!
//! Two tables: `expenses` and `categories`. The same schema is used for the
//! primary database and for secondary database exports.

use rusqlite::Connection;

use crate::error::ExpenseError;

/// `CREATE` statement for the expenses table
pub const CREATE_EXPENSES: &str = "CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    amount REAL NOT NULL,
    category TEXT NOT NULL,
    date TEXT NOT NULL,
    description TEXT
)";

/// `CREATE` statement for the categories table
pub const CREATE_CATEGORIES: &str = "CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    name TEXT UNIQUE
)";

/// Create both tables if they do not exist yet
pub fn initialize_schema(conn: &Connection) -> Result<(), ExpenseError> {
    conn.execute(CREATE_EXPENSES, [])?;
    conn.execute(CREATE_CATEGORIES, [])?;
    Ok(())
}

/// Drop and re-create both tables (used for secondary database exports)
pub fn recreate_schema(conn: &Connection) -> Result<(), ExpenseError> {
    conn.execute("DROP TABLE IF EXISTS expenses", [])?;
    conn.execute("DROP TABLE IF EXISTS categories", [])?;
    initialize_schema(conn)
}
