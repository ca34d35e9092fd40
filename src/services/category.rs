//! Category service
//!
//! Provides business logic for managing the category set: name checks
//! before insert, and tolerant removal.

use tracing::error;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Category;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a category.
    ///
    /// An existing name yields [`ExpenseError::CategoryExists`], which callers
    /// should surface as a warning rather than abort on.
    pub fn add(&self, name: &str) -> ExpenseResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ExpenseError::missing_field("name"));
        }

        self.storage.add_category(name)
    }

    /// Remove a category by name; returns `false` if it did not exist.
    /// Expenses already recorded under the name are not touched.
    pub fn remove(&self, name: &str) -> ExpenseResult<bool> {
        self.storage.remove_category(name.trim())
    }

    /// List category names in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<String>> {
        self.storage.get_categories()
    }

    /// Category names, or an empty list if the store cannot be read
    pub fn snapshot(&self) -> Vec<String> {
        match self.storage.get_categories() {
            Ok(names) => names,
            Err(e) => {
                error!(error = %e, "showing empty category list after read failure");
                Vec::new()
            }
        }
    }

    /// Check whether a category name exists
    pub fn exists(&self, name: &str) -> ExpenseResult<bool> {
        Ok(self.storage.categories().get_by_name(name.trim())?.is_some())
    }
}
