//! CSV Export functionality
//!
//! Writes one header row and one row per expense, columns in field order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use super::{ExportSnapshot, Exporter, EXPORT_COLUMNS};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Exports expenses as CSV
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    amount: f64,
    category: &'a str,
    date: String,
    description: &'a str,
}

impl<'a> From<&'a Expense> for CsvRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.as_i64(),
            amount: expense.amount,
            category: &expense.category,
            date: expense.date_string(),
            description: expense.description_str(),
        }
    }
}

/// Write expenses as CSV to any writer
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Header written explicitly so an empty export still has one
    csv_writer.write_record(EXPORT_COLUMNS)?;
    for expense in expenses {
        csv_writer.serialize(CsvRow::from(expense))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush CSV: {}", e)))?;
    Ok(())
}

impl Exporter for CsvExporter {
    fn write_to_path(&self, snapshot: &ExportSnapshot, destination: &Path) -> ExpenseResult<()> {
        let file = File::create(destination).map_err(|e| {
            ExpenseError::Export(format!(
                "Failed to create file {}: {}",
                destination.display(),
                e
            ))
        })?;

        export_expenses_csv(&snapshot.expenses, BufWriter::new(file))
    }
}
