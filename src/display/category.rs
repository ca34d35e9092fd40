//! Category display formatting

/// Format category names as a simple list
pub fn format_category_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No categories found.\n\nRun 'expenses category add <name>' to create one.\n"
            .to_string();
    }

    let mut output = String::from("Categories:\n");
    for name in names {
        output.push_str(&format!("  {}\n", name));
    }
    output
}
