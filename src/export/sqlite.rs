//! Secondary database export
//!
//! The destination file gets the same two-table schema as the primary
//! database. Existing tables there are dropped first, so repeated exports
//! to one file do not accumulate rows.

use std::path::Path;

use rusqlite::{params, Connection};

use super::{ExportSnapshot, Exporter};
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::schema::recreate_schema;

/// Exports expenses and categories into another SQLite file
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteExporter;

impl SqliteExporter {
    /// Populate an open connection from a snapshot, preserving ids
    pub fn write_to_connection(
        &self,
        snapshot: &ExportSnapshot,
        conn: &mut Connection,
    ) -> ExpenseResult<()> {
        recreate_schema(conn)?;

        let tx = conn.transaction()?;
        {
            let mut insert_expense = tx.prepare(
                "INSERT INTO expenses (id, amount, category, date, description)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for expense in &snapshot.expenses {
                insert_expense.execute(params![
                    expense.id.as_i64(),
                    expense.amount,
                    expense.category,
                    expense.date_string(),
                    expense.description
                ])?;
            }

            let mut insert_category =
                tx.prepare("INSERT INTO categories (id, name) VALUES (?1, ?2)")?;
            for category in &snapshot.categories {
                insert_category.execute(params![category.id.as_i64(), category.name])?;
            }
        }
        tx.commit()?;

        Ok(())
    }
}

impl Exporter for SqliteExporter {
    fn write_to_path(&self, snapshot: &ExportSnapshot, destination: &Path) -> ExpenseResult<()> {
        let mut conn = Connection::open(destination).map_err(|e| {
            ExpenseError::Export(format!(
                "Failed to open {}: {}",
                destination.display(),
                e
            ))
        })?;

        self.write_to_connection(snapshot, &mut conn)?;

        conn.close().map_err(|(_, e)| {
            ExpenseError::Export(format!(
                "Failed to close {}: {}",
                destination.display(),
                e
            ))
        })
    }
}
