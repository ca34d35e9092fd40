//! Report display formatting
//!
//! Renders spending aggregates as tables, with a simple text bar so the
//! distribution is visible without a chart widget.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_amount;
use crate::reports::{CategorySpending, MonthlySpending};

const BAR_WIDTH: f64 = 20.0;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

fn bar(fraction: f64) -> String {
    "█".repeat((fraction * BAR_WIDTH).round().max(0.0) as usize)
}

/// Format spending by category
pub fn format_category_report(rows: &[CategorySpending], symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses to report.\n".to_string();
    }

    let table_rows = rows.iter().map(|r| CategoryRow {
        category: r.category.clone(),
        count: r.count,
        total: format_amount(r.total, symbol),
        share: format!("{:.1}%", r.percentage),
        bar: bar(r.percentage / 100.0),
    });

    format!("{}\n", Table::new(table_rows).with(Style::psql()))
}

/// Format spending by month
pub fn format_monthly_report(rows: &[MonthlySpending], symbol: &str) -> String {
    if rows.is_empty() {
        return "No expenses to report.\n".to_string();
    }

    let table_rows = rows.iter().map(|r| MonthRow {
        month: r.label(),
        count: r.count,
        total: format_amount(r.total, symbol),
    });

    format!("{}\n", Table::new(table_rows).with(Style::psql()))
}
