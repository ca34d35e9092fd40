//! Expense service
//!
//! Composes validation with the store: raw input is validated and
//! normalized before it is written, and reads can be filtered.

use tracing::{debug, error};

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::services::filter::{
    filter_expenses, ExpenseFilter, FilterInput, ALL_CATEGORIES,
};
use crate::services::validation::ExpenseValidator;
use crate::storage::Storage;

/// Raw input for a new expense, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct AddExpenseInput {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: Option<String>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    validator: ExpenseValidator,
    all_label: String,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service with default date formats
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            validator: ExpenseValidator::default(),
            all_label: ALL_CATEGORIES.to_string(),
        }
    }

    /// Create a new expense service configured from settings
    pub fn with_settings(storage: &'a Storage, settings: &Settings) -> Self {
        Self {
            storage,
            validator: ExpenseValidator::from_settings(settings),
            all_label: settings.all_categories_label.clone(),
        }
    }

    /// Validate raw input and store the resulting expense
    pub fn add(&self, input: &AddExpenseInput) -> ExpenseResult<Expense> {
        let expense = self
            .validator
            .validate(
                &input.amount,
                &input.category,
                &input.date,
                input.description.as_deref(),
            )
            .map_err(|e| {
                debug!(error = %e, "expense rejected by validation");
                e
            })?;

        self.storage.add_expense(&expense)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.get_expenses()
    }

    /// All readable expenses, or an empty list if the store cannot be read.
    ///
    /// For display paths that must not fail: rows with a malformed date are
    /// skipped and a failed query yields nothing, both logged.
    pub fn snapshot(&self) -> Vec<Expense> {
        match self.storage.get_expenses_skipping_malformed() {
            Ok(expenses) => expenses,
            Err(e) => {
                error!(error = %e, "showing empty expense list after read failure");
                Vec::new()
            }
        }
    }

    /// Parse raw filter input using this service's date formats and sentinel
    pub fn parse_filter(&self, input: &FilterInput) -> ExpenseResult<ExpenseFilter> {
        ExpenseFilter::from_input(input, &self.all_label, &self.validator)
    }

    /// Filter the current expenses by raw user input
    pub fn filter(&self, input: &FilterInput) -> ExpenseResult<Vec<Expense>> {
        let filter = self.parse_filter(input)?;
        let expenses = self.list()?;
        Ok(filter_expenses(&expenses, &filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExpenseError, ValidationError};

    fn input(amount: &str, category: &str, date: &str, description: &str) -> AddExpenseInput {
        AddExpenseInput {
            amount: amount.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            description: Some(description.to_string()),
        }
    }

    #[test]
    fn test_add_valid_expense() {
        let storage = Storage::open_in_memory().unwrap();
        let service = ExpenseService::new(&storage);

        let stored = service
            .add(&input("100.0", "Food", "2024-06-21", "Dinner"))
            .unwrap();
        assert_eq!(stored.id.as_i64(), 1);

        let expenses = service.list().unwrap();
        assert_eq!(expenses, vec![stored]);
    }

    #[test]
    fn test_add_missing_fields_writes_nothing() {
        let storage = Storage::open_in_memory().unwrap();
        let service = ExpenseService::new(&storage);

        let err = service.add(&input("0.0", "", "", "Test")).unwrap_err();
        assert!(matches!(
            err,
            ExpenseError::Validation(ValidationError::MissingField(_))
        ));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_accepts_us_dates() {
        let storage = Storage::open_in_memory().unwrap();
        let service = ExpenseService::new(&storage);

        let stored = service.add(&input("9.99", "Books", "02/29/2024", "")).unwrap();
        assert_eq!(stored.date_string(), "2024-02-29");
        assert!(stored.description.is_none());
    }

    #[test]
    fn test_filter_all_returns_every_row() {
        let storage = Storage::open_in_memory().unwrap();
        let service = ExpenseService::new(&storage);

        for day in 1..=5 {
            service
                .add(&input("10", "Food", &format!("2024-01-0{}", day), ""))
                .unwrap();
        }

        let filtered = service
            .filter(&FilterInput {
                category: Some("All".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(filtered, service.list().unwrap());
    }

    #[test]
    fn test_filter_rejects_bad_bound() {
        let storage = Storage::open_in_memory().unwrap();
        let service = ExpenseService::new(&storage);

        let err = service
            .filter(&FilterInput {
                min_amount: Some("lots".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ExpenseError::FilterInput(_)));
    }

    #[test]
    fn test_custom_all_label() {
        let storage = Storage::open_in_memory().unwrap();
        let mut settings = Settings::default();
        settings.all_categories_label = "*".to_string();
        let service = ExpenseService::with_settings(&storage, &settings);

        let filter = service
            .parse_filter(&FilterInput {
                category: Some("*".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_snapshot_degrades_to_empty() {
        let storage = Storage::open_in_memory().unwrap();
        storage
            .connection()
            .execute("DROP TABLE expenses", [])
            .unwrap();

        let service = ExpenseService::new(&storage);
        assert!(service.list().unwrap_err().is_storage());
        assert!(service.snapshot().is_empty());
    }

    #[test]
    fn test_snapshot_skips_malformed_rows() {
        let storage = Storage::open_in_memory().unwrap();
        let service = ExpenseService::new(&storage);

        service.add(&input("10", "Food", "2024-01-01", "")).unwrap();
        storage
            .connection()
            .execute(
                "INSERT INTO expenses (amount, category, date) VALUES (3.0, 'Bus', '01/02/2024')",
                [],
            )
            .unwrap();
        service.add(&input("20", "Food", "2024-01-03", "")).unwrap();

        assert!(service.list().is_err());
        let amounts: Vec<_> = service.snapshot().iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![10.0, 20.0]);
    }
}
