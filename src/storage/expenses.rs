//! Expense repository for SQLite storage
//!
//! Inserts run in autocommit mode, so a successful insert is durable and
//! visible to every later read.

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId, NewExpense, CANONICAL_DATE_FORMAT};

/// Repository for expense persistence
pub struct ExpenseRepository<'a> {
    conn: &'a Connection,
}

impl<'a> ExpenseRepository<'a> {
    /// Create a repository over an open connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert one expense and return it with its assigned id
    pub fn insert(&self, expense: &NewExpense) -> Result<Expense, ExpenseError> {
        self.conn.execute(
            "INSERT INTO expenses (amount, category, date, description) VALUES (?1, ?2, ?3, ?4)",
            params![
                expense.amount,
                expense.category,
                expense.date_string(),
                expense.description
            ],
        )?;

        let id = ExpenseId::from_raw(self.conn.last_insert_rowid());
        Ok(Expense::from_new(id, expense.clone()))
    }

    /// Get all expenses in insertion (id) order.
    ///
    /// A row whose date is not in canonical form fails the whole read.
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let expenses = self
            .get_all_rows()?
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    /// Get every row in id order, keeping per-row conversion failures
    pub fn get_all_rows(&self) -> Result<Vec<rusqlite::Result<Expense>>, ExpenseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, amount, category, date, description FROM expenses ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], map_expense_row)?.collect();
        Ok(rows)
    }

    /// Get a single expense by id
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, amount, category, date, description FROM expenses WHERE id = ?1",
        )?;

        let mut rows = stmt.query_map(params![id.as_i64()], map_expense_row)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// Count stored expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Map a `SELECT id, amount, category, date, description` row
pub(crate) fn map_expense_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    let date_text: String = row.get(3)?;
    let date = NaiveDate::parse_from_str(&date_text, CANONICAL_DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Expense {
        id: ExpenseId::from_raw(row.get(0)?),
        amount: row.get(1)?,
        category: row.get(2)?,
        date,
        description: row.get(4)?,
    })
}
