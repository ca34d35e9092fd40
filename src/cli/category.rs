//! Category CLI commands
//!
//! Implements CLI commands for managing the category set.

use clap::Subcommand;

use crate::display::category::format_category_list;
use crate::error::ExpenseResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
    },

    /// Remove a category (expenses keep their category text)
    Remove {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> ExpenseResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&service.snapshot()));
        }

        CategoryCommands::Add { name } => match service.add(&name) {
            Ok(category) => println!("Created category: {}", category.name),
            Err(e) if e.is_category_exists() => println!("Warning: {}", e),
            Err(e) => return Err(e),
        },

        CategoryCommands::Remove { name } => {
            if service.remove(&name)? {
                println!("Removed category: {}", name.trim());
            } else {
                println!("No category named '{}'", name.trim());
            }
        }
    }

    Ok(())
}
