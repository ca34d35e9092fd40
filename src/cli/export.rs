//! CLI commands for data export
//!
//! Provides commands for exporting expenses in various formats.

use std::path::PathBuf;

use clap::Args;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;
use crate::export::ExportFormat;
use crate::storage::Storage;

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (defaults to the exports directory)
    pub output: Option<PathBuf>,
}

/// Default file name for a format
fn default_file_name(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Csv => "expenses.csv",
        ExportFormat::Pdf => "expenses.pdf",
        ExportFormat::Sqlite => "expenses_export.db",
    }
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    paths: &ExpensePaths,
    args: ExportArgs,
) -> ExpenseResult<()> {
    let output = match args.output {
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            paths.export_dir().join(default_file_name(args.format))
        }
    };

    let count = storage.export(args.format, &output)?;
    println!(
        "Exported {} expenses ({}) to: {}",
        count,
        args.format,
        output.display()
    );

    Ok(())
}
