//! Spending aggregates
//!
//! Totals grouped by category and by calendar month, computed from an
//! expense snapshot. These feed the distribution and monthly charts.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;

use crate::models::Expense;

/// Spending total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    /// Category name as recorded on the expenses
    pub category: String,
    /// Sum of amounts
    pub total: f64,
    /// Number of expenses
    pub count: usize,
    /// Share of the overall total, 0-100
    pub percentage: f64,
}

/// Spending total for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySpending {
    pub year: i32,
    pub month: u32,
    /// Sum of amounts
    pub total: f64,
    /// Number of expenses
    pub count: usize,
}

impl MonthlySpending {
    /// Month label in `YYYY-MM` form
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Spending report over a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingReport {
    pub by_category: Vec<CategorySpending>,
    pub by_month: Vec<MonthlySpending>,
    pub total: f64,
    pub count: usize,
}

impl SpendingReport {
    /// Build both breakdowns from one snapshot
    pub fn generate(expenses: &[Expense]) -> Self {
        Self {
            by_category: spending_by_category(expenses),
            by_month: spending_by_month(expenses),
            total: expenses.iter().map(|e| e.amount).sum(),
            count: expenses.len(),
        }
    }
}

/// Totals per category, largest first (ties by name)
pub fn spending_by_category(expenses: &[Expense]) -> Vec<CategorySpending> {
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    let mut grand_total = 0.0;

    for expense in expenses {
        let entry = totals.entry(expense.category.as_str()).or_insert((0.0, 0));
        entry.0 += expense.amount;
        entry.1 += 1;
        grand_total += expense.amount;
    }

    let mut result: Vec<CategorySpending> = totals
        .into_iter()
        .map(|(category, (total, count))| CategorySpending {
            category: category.to_string(),
            total,
            count,
            percentage: if grand_total > 0.0 {
                total / grand_total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    result.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    result
}

/// Totals per calendar month, oldest first
pub fn spending_by_month(expenses: &[Expense]) -> Vec<MonthlySpending> {
    let mut totals: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();

    for expense in expenses {
        let key = (expense.date.year(), expense.date.month());
        let entry = totals.entry(key).or_insert((0.0, 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|((year, month), (total, count))| MonthlySpending {
            year,
            month,
            total,
            count,
        })
        .collect()
}
