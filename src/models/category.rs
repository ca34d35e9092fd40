//! Category model
//!
//! Categories are an independent set of unique names. Expenses keep their
//! category as plain text, so removing a category leaves existing expenses
//! untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A named label expenses can be tagged with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier
    pub id: CategoryId,

    /// Category name, unique across all categories
    pub name: String,
}

impl Category {
    /// Create a category value
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new(CategoryId::from_raw(1), "Food");
        assert_eq!(category.name, "Food");
        assert_eq!(category.to_string(), "Food");
    }

    #[test]
    fn test_serialization() {
        let category = Category::new(CategoryId::from_raw(5), "Travel");
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, deserialized);
    }
}
