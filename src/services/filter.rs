//! Expense filtering
//!
//! Filters operate on an in-memory snapshot. Every predicate is optional and
//! they combine with AND. Date and amount bounds are inclusive on both ends.
//! Matching rows keep the order of the input snapshot.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::services::validation::ExpenseValidator;

/// Category filter value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Parsed filter predicates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Exact category name
    pub category: Option<String>,
    /// Earliest date, inclusive
    pub start_date: Option<NaiveDate>,
    /// Latest date, inclusive
    pub end_date: Option<NaiveDate>,
    /// Smallest amount, inclusive
    pub min_amount: Option<f64>,
    /// Largest amount, inclusive
    pub max_amount: Option<f64>,
}

/// Raw filter input as typed by the user. Blank values mean "no bound".
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_amount: Option<String>,
    pub max_amount: Option<String>,
}

impl ExpenseFilter {
    /// Create a new empty filter (passes everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by exact category. The [`ALL_CATEGORIES`] sentinel clears it.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category == ALL_CATEGORIES {
            None
        } else {
            Some(category)
        };
        self
    }

    /// Earliest date, inclusive
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Latest date, inclusive
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Both date bounds, inclusive
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date(start).end_date(end)
    }

    /// Smallest amount, inclusive
    pub fn min_amount(mut self, amount: f64) -> Self {
        self.min_amount = Some(amount);
        self
    }

    /// Largest amount, inclusive
    pub fn max_amount(mut self, amount: f64) -> Self {
        self.max_amount = Some(amount);
        self
    }

    /// Parse raw user input into a filter.
    ///
    /// `all_label` is the category value treated as "no filter"; dates accept
    /// the same formats as expense entry. Malformed bounds are rejected with
    /// [`ExpenseError::FilterInput`] rather than ignored.
    pub fn from_input(
        input: &FilterInput,
        all_label: &str,
        validator: &ExpenseValidator,
    ) -> ExpenseResult<Self> {
        let category = non_blank(&input.category)
            .filter(|c| *c != all_label && *c != ALL_CATEGORIES)
            .map(str::to_string);

        Ok(Self {
            category,
            start_date: parse_date_bound("start date", &input.start_date, validator)?,
            end_date: parse_date_bound("end date", &input.end_date, validator)?,
            min_amount: parse_amount_bound("minimum amount", &input.min_amount)?,
            max_amount: parse_amount_bound("maximum amount", &input.max_amount)?,
        })
    }

    /// Check whether no predicate is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check a single expense against every predicate
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category {
            if expense.category != *category {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if expense.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if expense.amount > max {
                return false;
            }
        }
        true
    }

    /// Return the matching subset, in input order
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

/// Filter a snapshot of expenses
pub fn filter_expenses(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    filter.apply(expenses)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date_bound(
    name: &str,
    value: &Option<String>,
    validator: &ExpenseValidator,
) -> ExpenseResult<Option<NaiveDate>> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => validator.parse_date(raw).map(Some).map_err(|_| {
            ExpenseError::FilterInput(format!(
                "{} '{}' is not a valid date (expected one of: {})",
                name,
                raw,
                validator.date_formats().join(", ")
            ))
        }),
    }
}

fn parse_amount_bound(name: &str, value: &Option<String>) -> ExpenseResult<Option<f64>> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => match raw.parse::<f64>() {
            Ok(amount) if amount.is_finite() => Ok(Some(amount)),
            _ => Err(ExpenseError::FilterInput(format!(
                "{} '{}' is not a number",
                name, raw
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn expense(id: i64, amount: f64, category: &str, day: u32) -> Expense {
        Expense {
            id: ExpenseId::from_raw(id),
            amount,
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description: None,
        }
    }

    /// One expense per day of January 2024, amounts cycling 10..=100
    fn january() -> Vec<Expense> {
        (1..=31)
            .map(|day| {
                let category = if day % 2 == 0 { "Food" } else { "Travel" };
                expense(day as i64, ((day - 1) % 10 + 1) as f64 * 10.0, category, day)
            })
            .collect()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn input(
        category: &str,
        start: &str,
        end: &str,
        min: &str,
        max: &str,
    ) -> FilterInput {
        FilterInput {
            category: Some(category.to_string()),
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            min_amount: Some(min.to_string()),
            max_amount: Some(max.to_string()),
        }
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let expenses: Vec<_> = january().into_iter().take(5).collect();
        let filter =
            ExpenseFilter::from_input(&input("All", "", "", "", ""), "All", &ExpenseValidator::default())
                .unwrap();

        assert!(filter.is_empty());
        assert_eq!(filter.apply(&expenses), expenses);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let filter = ExpenseFilter::new().date_range(date(10), date(20));
        let days: Vec<u32> = filter
            .apply(&january())
            .iter()
            .map(|e| chrono::Datelike::day(&e.date))
            .collect();

        assert_eq!(days, (10..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let filter = ExpenseFilter::new()
            .date_range(date(10), date(20))
            .min_amount(50.0);
        let result = filter.apply(&january());

        assert!(!result.is_empty());
        for e in &result {
            assert!(e.date >= date(10) && e.date <= date(20));
            assert!(e.amount >= 50.0);
        }
        // day 10 (100.0) and days 15..=20 (50.0..=100.0)
        assert_eq!(result.len(), 7);
    }

    #[test]
    fn test_amount_bounds_are_inclusive_and_numeric() {
        let expenses = vec![
            expense(1, 9.0, "A", 1),
            expense(2, 10.0, "A", 1),
            expense(3, 100.0, "A", 1),
            expense(4, 101.0, "A", 1),
        ];
        let filter = ExpenseFilter::new().min_amount(10.0).max_amount(100.0);
        let ids: Vec<_> = filter.apply(&expenses).iter().map(|e| e.id.as_i64()).collect();

        // "9" > "10" as strings; numeric comparison keeps 9 out
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_category_exact_match() {
        let expenses = vec![
            expense(1, 1.0, "Food", 1),
            expense(2, 1.0, "food", 1),
            expense(3, 1.0, "Food ", 1),
        ];
        let ids: Vec<_> = ExpenseFilter::new()
            .category("Food")
            .apply(&expenses)
            .iter()
            .map(|e| e.id.as_i64())
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_all_sentinel_means_no_filter() {
        assert!(ExpenseFilter::new().category(ALL_CATEGORIES).is_empty());

        let filter = ExpenseFilter::from_input(
            &input("Everything", "", "", "", ""),
            "Everything",
            &ExpenseValidator::default(),
        )
        .unwrap();
        assert!(filter.category.is_none());
    }

    #[test]
    fn test_from_input_parses_bounds() {
        let filter = ExpenseFilter::from_input(
            &input("Food", "01/10/2024", "2024-01-20", "5", "50.5"),
            ALL_CATEGORIES,
            &ExpenseValidator::default(),
        )
        .unwrap();

        assert_eq!(filter.category.as_deref(), Some("Food"));
        assert_eq!(filter.start_date, Some(date(10)));
        assert_eq!(filter.end_date, Some(date(20)));
        assert_eq!(filter.min_amount, Some(5.0));
        assert_eq!(filter.max_amount, Some(50.5));
    }

    #[test]
    fn test_malformed_bounds_are_rejected() {
        let validator = ExpenseValidator::default();
        let cases = [
            input("", "2024-13-01", "", "", ""),
            input("", "", "tomorrow", "", ""),
            input("", "", "", "ten", ""),
            input("", "", "", "", "NaN"),
        ];

        for case in &cases {
            let err = ExpenseFilter::from_input(case, ALL_CATEGORIES, &validator).unwrap_err();
            assert!(matches!(err, ExpenseError::FilterInput(_)), "{case:?}");
        }
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let filter = ExpenseFilter::new().date_range(date(20), date(10));
        assert!(filter.apply(&january()).is_empty());
    }
}
