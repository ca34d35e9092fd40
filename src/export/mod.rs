//! Export module for the expense tracker
//!
//! Exports a snapshot of the expenses (columns `id, amount, category, date,
//! description`) to:
//! - CSV: header row plus one row per expense
//! - PDF: a single page holding the expense table
//! - SQLite: a secondary database file with the same two-table schema

pub mod csv;
pub mod pdf;
pub mod sqlite;

pub use self::csv::{export_expenses_csv, CsvExporter};
pub use self::pdf::{render_expenses_pdf, PdfExporter};
pub use self::sqlite::SqliteExporter;

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use tracing::{error, info};

use crate::error::ExpenseResult;
use crate::models::{Category, Expense};
use crate::storage::Storage;

/// Column names shared by every export format, in field order
pub const EXPORT_COLUMNS: [&str; 5] = ["id", "amount", "category", "date", "description"];

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Single-page PDF table
    Pdf,
    /// Secondary SQLite database file
    Sqlite,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Pdf => write!(f, "PDF"),
            Self::Sqlite => write!(f, "SQLite"),
        }
    }
}

/// Rows retrieved from the store for one export
#[derive(Debug, Clone, Default)]
pub struct ExportSnapshot {
    pub expenses: Vec<Expense>,
    pub categories: Vec<Category>,
}

impl ExportSnapshot {
    /// Read the current expenses and categories
    pub fn from_storage(storage: &Storage) -> ExpenseResult<Self> {
        Ok(Self {
            expenses: storage.get_expenses()?,
            categories: storage.categories().get_all()?,
        })
    }
}

/// A serializer that writes a snapshot to a destination file
pub trait Exporter {
    /// Write the snapshot to `destination`, replacing any existing content
    fn write_to_path(&self, snapshot: &ExportSnapshot, destination: &Path) -> ExpenseResult<()>;
}

/// Get the exporter for a format
pub fn exporter_for(format: ExportFormat) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Csv => Box::new(CsvExporter),
        ExportFormat::Pdf => Box::new(PdfExporter),
        ExportFormat::Sqlite => Box::new(SqliteExporter),
    }
}

/// Export the store's current expenses; returns the number of rows written
pub fn export_to_path(
    storage: &Storage,
    format: ExportFormat,
    destination: &Path,
) -> ExpenseResult<usize> {
    let snapshot = ExportSnapshot::from_storage(storage)?;

    exporter_for(format)
        .write_to_path(&snapshot, destination)
        .map_err(|e| {
            error!(%format, path = %destination.display(), error = %e, "export failed");
            e
        })?;

    info!(%format, path = %destination.display(), rows = snapshot.expenses.len(), "export complete");
    Ok(snapshot.expenses.len())
}
