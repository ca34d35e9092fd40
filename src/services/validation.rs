//! Expense validation and normalization
//!
//! Every expense write passes through here first. Raw user input is checked
//! for presence and format, and the date is translated from any accepted
//! input format into the canonical `YYYY-MM-DD` storage form.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::ValidationError;
use crate::models::{NewExpense, CANONICAL_DATE_FORMAT};

/// Input formats accepted when none are configured: ISO first, then US style
pub const DEFAULT_DATE_INPUT_FORMATS: &[&str] = &[CANONICAL_DATE_FORMAT, "%m/%d/%Y"];

/// Validates raw expense fields against a list of accepted date formats
#[derive(Debug, Clone)]
pub struct ExpenseValidator {
    date_formats: Vec<String>,
}

impl Default for ExpenseValidator {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_INPUT_FORMATS.iter().map(|f| f.to_string()))
    }
}

impl ExpenseValidator {
    /// Create a validator accepting the given date formats, tried in order.
    /// The canonical format is always accepted.
    pub fn new<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut date_formats: Vec<String> = formats.into_iter().map(Into::into).collect();
        if !date_formats.iter().any(|f| f == CANONICAL_DATE_FORMAT) {
            date_formats.insert(0, CANONICAL_DATE_FORMAT.to_string());
        }
        Self { date_formats }
    }

    /// Create a validator from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.date_input_formats.iter().cloned())
    }

    /// Accepted date input formats
    pub fn date_formats(&self) -> &[String] {
        &self.date_formats
    }

    /// Validate raw fields and produce a normalized expense.
    ///
    /// Presence of amount, category and date is checked before any parsing,
    /// so an input missing several fields reports the first of them.
    pub fn validate(
        &self,
        amount_raw: &str,
        category_raw: &str,
        date_raw: &str,
        description_raw: Option<&str>,
    ) -> Result<NewExpense, ValidationError> {
        let amount_raw = amount_raw.trim();
        let category = category_raw.trim();
        let date_raw = date_raw.trim();

        if amount_raw.is_empty() {
            return Err(ValidationError::MissingField("amount"));
        }
        if category.is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        if date_raw.is_empty() {
            return Err(ValidationError::MissingField("date"));
        }

        let amount = parse_amount(amount_raw)?;
        let date = self.parse_date(date_raw)?;
        let description = description_raw
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(NewExpense {
            amount,
            category: category.to_string(),
            date,
            description,
        })
    }

    /// Parse a date under any accepted format
    pub fn parse_date(&self, raw: &str) -> Result<NaiveDate, ValidationError> {
        let raw = raw.trim();
        self.date_formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
            .ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))
    }

    /// Translate a date from any accepted format into canonical form
    pub fn normalize_date(&self, raw: &str) -> Result<String, ValidationError> {
        Ok(self.parse_date(raw)?.format(CANONICAL_DATE_FORMAT).to_string())
    }
}

/// Parse an amount that must be finite and non-negative.
/// Negative zero is stored as zero.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount.abs()),
        _ => Err(ValidationError::InvalidAmount(raw.to_string())),
    }
}

/// Validate raw expense fields with the default accepted date formats
pub fn validate_and_normalize_expense(
    amount_raw: &str,
    category_raw: &str,
    date_raw: &str,
    description_raw: Option<&str>,
) -> Result<NewExpense, ValidationError> {
    ExpenseValidator::default().validate(amount_raw, category_raw, date_raw, description_raw)
}

/// Normalize a date with the default accepted formats
pub fn normalize_date(raw: &str) -> Result<String, ValidationError> {
    ExpenseValidator::default().normalize_date(raw)
}
