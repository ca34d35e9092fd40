//! Category repository for SQLite storage
//!
//! Uniqueness of names is enforced by the `UNIQUE` constraint on
//! `categories.name`; a violation surfaces as [`ExpenseError::CategoryExists`].

use rusqlite::{params, Connection, ErrorCode};

use crate::error::ExpenseError;
use crate::models::{Category, CategoryId};

/// Repository for category persistence
pub struct CategoryRepository<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryRepository<'a> {
    /// Create a repository over an open connection
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a category by name
    pub fn insert(&self, name: &str) -> Result<Category, ExpenseError> {
        match self
            .conn
            .execute("INSERT INTO categories (name) VALUES (?1)", params![name])
        {
            Ok(_) => Ok(Category::new(
                CategoryId::from_raw(self.conn.last_insert_rowid()),
                name,
            )),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(ExpenseError::CategoryExists(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a category by name, returning whether a row was removed
    pub fn delete_by_name(&self, name: &str) -> Result<bool, ExpenseError> {
        let removed = self
            .conn
            .execute("DELETE FROM categories WHERE name = ?1", params![name])?;
        Ok(removed > 0)
    }

    /// Get all categories in insertion order
    pub fn get_all(&self) -> Result<Vec<Category>, ExpenseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id ASC")?;

        let categories = stmt
            .query_map([], |row| {
                Ok(Category::new(CategoryId::from_raw(row.get(0)?), row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// Get all category names in insertion order
    pub fn get_names(&self) -> Result<Vec<String>, ExpenseError> {
        Ok(self.get_all()?.into_iter().map(|c| c.name).collect())
    }

    /// Get a category by exact name
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, ExpenseError> {
        Ok(self.get_all()?.into_iter().find(|c| c.name == name))
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
