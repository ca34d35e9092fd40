//! Expense CLI commands
//!
//! Implements CLI commands for adding, listing and filtering expenses.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_table};
use crate::error::ExpenseResult;
use crate::models::{ExpenseId, CANONICAL_DATE_FORMAT};
use crate::services::{AddExpenseInput, CategoryService, ExpenseService, FilterInput};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount (e.g., "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (YYYY-MM-DD or MM/DD/YYYY), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List all expenses
    List,
    /// Show expense details
    Show {
        /// Expense ID
        id: ExpenseId,
    },
    /// Filter expenses (all bounds inclusive)
    Filter {
        /// Category name ("All" for every category)
        #[arg(short, long)]
        category: Option<String>,
        /// Start date
        #[arg(long)]
        from: Option<String>,
        /// End date
        #[arg(long)]
        to: Option<String>,
        /// Minimum amount
        #[arg(long)]
        min: Option<String>,
        /// Maximum amount
        #[arg(long)]
        max: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::with_settings(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let date = date.unwrap_or_else(|| {
                Local::now()
                    .date_naive()
                    .format(CANONICAL_DATE_FORMAT)
                    .to_string()
            });

            let input = AddExpenseInput {
                amount,
                category: category.unwrap_or_default(),
                date,
                description,
            };

            let expense = service.add(&input)?;
            println!("Added expense #{}", expense.id);
            if let Ok(false) = CategoryService::new(storage).exists(&expense.category) {
                println!(
                    "Note: '{}' is not in the category list (see 'expenses category add')",
                    expense.category
                );
            }
            print!("{}", format_expense_details(&expense, symbol));
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_table(&service.snapshot(), symbol));
        }

        ExpenseCommands::Show { id } => match storage.expenses().get(id)? {
            Some(expense) => print!("{}", format_expense_details(&expense, symbol)),
            None => println!("No expense with id {}", id),
        },

        ExpenseCommands::Filter {
            category,
            from,
            to,
            min,
            max,
        } => {
            let input = FilterInput {
                category,
                start_date: from,
                end_date: to,
                min_amount: min,
                max_amount: max,
            };

            let expenses = service.filter(&input)?;
            print!("{}", format_expense_table(&expenses, symbol));
        }
    }

    Ok(())
}
