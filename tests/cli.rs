//! End-to-end tests for the `expenses` binary

use std::path::Path;

use assert_cmd::Command;
use chrono::Local;
use expense_tracker::storage::Storage;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env_remove("EXPENSE_TRACKER_DATA_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn add(data_dir: &Path, amount: &str, category: &str, date: &str) {
    expenses(data_dir)
        .args(["expense", "add", amount, "-c", category, "-d", date])
        .assert()
        .success();
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["expense", "add", "12.50", "-c", "Food", "-d", "06/21/2024", "-m", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense #1"))
        .stdout(predicate::str::contains("2024-06-21"));

    expenses(dir.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("1 expense(s), total $12.50"));
}

#[test]
fn test_missing_category_fails() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["expense", "add", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: category"));

    expenses(dir.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn test_invalid_date_fails() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["expense", "add", "5", "-c", "Food", "-d", "2023-06-35"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_duplicate_category_warns() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["category", "add", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: Food"));

    expenses(dir.path())
        .args(["category", "add", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Category already exists: Food"));

    expenses(dir.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::eq("Categories:\n  Food\n"));
}

#[test]
fn test_filter_by_category_and_range() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "10", "Food", "2024-01-05");
    add(dir.path(), "200", "Travel", "2024-01-10");
    add(dir.path(), "30", "Food", "2024-02-01");

    expenses(dir.path())
        .args(["expense", "filter", "--category", "Food", "--to", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 expense(s), total $10.00"));

    expenses(dir.path())
        .args(["expense", "filter", "--category", "All", "--min", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 expense(s), total $230.00"));
}

#[test]
fn test_filter_rejects_bad_amount() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["expense", "filter", "--min", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filter input"));
}

#[test]
fn test_export_csv() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "12.5", "Food", "2024-06-21");
    let output = dir.path().join("out.csv");

    expenses(dir.path())
        .args(["export", "csv"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents,
        "id,amount,category,date,description\n1,12.5,Food,2024-06-21,\n"
    );
}

#[test]
fn test_category_report() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "30", "Food", "2024-01-05");
    add(dir.path(), "70", "Travel", "2024-01-10");

    expenses(dir.path())
        .args(["report", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel"))
        .stdout(predicate::str::contains("70.0%"));
}

#[test]
fn test_show_expense() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "4.25", "Coffee", "2024-03-04");

    expenses(dir.path())
        .args(["expense", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount:      $4.25"))
        .stdout(predicate::str::contains("Category:    Coffee"));

    expenses(dir.path())
        .args(["expense", "show", "abc"])
        .assert()
        .failure();
}

#[test]
fn test_add_without_date_uses_today() {
    let dir = TempDir::new().unwrap();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    expenses(dir.path())
        .args(["expense", "add", "3.20", "-c", "Coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Date:        {}", today)));

    let storage = Storage::open(dir.path().join("data").join("expenses.db")).unwrap();
    assert_eq!(storage.get_expenses().unwrap()[0].date_string(), today);
}

#[test]
fn test_category_remove() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["category", "add", "Food"])
        .assert()
        .success();
    add(dir.path(), "8", "Food", "2024-05-01");

    expenses(dir.path())
        .args(["category", "remove", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed category: Food"));

    expenses(dir.path())
        .args(["category", "remove", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No category named 'Food'"));

    expenses(dir.path())
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("No categories found."));

    // expenses keep their category text
    expenses(dir.path())
        .args(["expense", "filter", "--category", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 expense(s), total $8.00"));
}

#[test]
fn test_export_sqlite() {
    let dir = TempDir::new().unwrap();
    expenses(dir.path())
        .args(["category", "add", "Food"])
        .assert()
        .success();
    add(dir.path(), "12.5", "Food", "2024-06-21");
    add(dir.path(), "40", "Travel", "2024-06-22");
    let output = dir.path().join("copy.db");

    expenses(dir.path())
        .args(["export", "sqlite"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 expenses (SQLite)"));

    let exported = Storage::open(&output).unwrap();
    let rows = exported.get_expenses().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id.as_i64(), 1);
    assert_eq!(rows[1].category, "Travel");
    assert_eq!(rows[1].date_string(), "2024-06-22");
    assert_eq!(exported.get_categories().unwrap(), vec!["Food"]);
}

#[test]
fn test_export_pdf_to_default_location() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "12.5", "Food", "2024-06-21");

    expenses(dir.path())
        .args(["export", "pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses (PDF)"));

    let bytes = std::fs::read(dir.path().join("exports").join("expenses.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_negative_zero_amount_displays_as_zero() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["expense", "add", "-0", "-c", "Gift", "-d", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount:      $0.00"));
}

#[test]
fn test_negative_amount_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(dir.path())
        .args(["expense", "add", "-5", "-c", "Gift", "-d", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount: '-5'"));
}
