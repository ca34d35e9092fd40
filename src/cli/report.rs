//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::{format_category_report, format_monthly_report};
use crate::error::ExpenseResult;
use crate::reports::SpendingReport;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending distribution by category
    Category,
    /// Spending totals by month
    Monthly,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let expenses = ExpenseService::with_settings(storage, settings).snapshot();
    let report = SpendingReport::generate(&expenses);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Category => {
            println!("Expense Distribution by Category");
            print!("{}", format_category_report(&report.by_category, symbol));
        }
        ReportCommands::Monthly => {
            println!("Monthly Expenses");
            print!("{}", format_monthly_report(&report.by_month, symbol));
        }
    }

    Ok(())
}
