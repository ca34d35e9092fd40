//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_amount;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.as_i64(),
        date: e.date_string(),
        category: e.category.clone(),
        amount: format_amount(e.amount, symbol),
        description: e.description_str().to_string(),
    });

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\n{} expense(s), total {}\n",
        Table::new(rows).with(Style::psql()),
        expenses.len(),
        format_amount(total, symbol)
    )
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date_string()));
    output.push_str(&format!("Amount:      {}\n", format_amount(expense.amount, symbol)));
    output.push_str(&format!("Category:    {}\n", expense.category));

    if let Some(description) = &expense.description {
        output.push_str(&format!("Description: {}\n", description));
    }

    output
}
