//! PDF Export functionality
//!
//! Renders every expense as one table on a single A4 page: a header row with
//! the export columns, a rule beneath it, then one text row per expense.
//! Row height and font size shrink with the row count so the table always
//! fits the page.

use std::path::Path;

use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};

use super::{ExportSnapshot, Exporter, EXPORT_COLUMNS};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;

const MAX_ROW_HEIGHT: f32 = 6.0;
const MAX_FONT_SIZE: f32 = 10.0;

/// Left edge of each column, in millimetres
const COLUMN_X: [f32; 5] = [15.0, 30.0, 60.0, 105.0, 135.0];

/// Longest description printed before truncation
const DESCRIPTION_WIDTH: usize = 36;

/// Exports expenses as a single-page PDF table
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExporter;

/// Table geometry for a given number of body rows
#[derive(Debug, Clone, Copy, PartialEq)]
struct TableLayout {
    row_height: f32,
    font_size: f32,
}

impl TableLayout {
    fn for_rows(body_rows: usize) -> Self {
        let available = PAGE_HEIGHT - 2.0 * MARGIN;
        let row_height = (available / (body_rows + 1) as f32).min(MAX_ROW_HEIGHT);
        // points per millimetre is ~2.83; keep text inside its row
        let font_size = (row_height * 2.4).min(MAX_FONT_SIZE);
        Self {
            row_height,
            font_size,
        }
    }

    /// Baseline of row `index` (0 is the header)
    fn baseline(&self, index: usize) -> f32 {
        PAGE_HEIGHT - MARGIN - self.row_height * (index + 1) as f32
    }
}

fn table_row(expense: &Expense) -> [String; 5] {
    let mut description: String = expense
        .description_str()
        .chars()
        .take(DESCRIPTION_WIDTH)
        .collect();
    if expense.description_str().chars().count() > DESCRIPTION_WIDTH {
        description.push_str("...");
    }

    [
        expense.id.to_string(),
        format!("{:.2}", expense.amount),
        expense.category.clone(),
        expense.date_string(),
        description,
    ]
}

/// Render expenses as PDF bytes
pub fn render_expenses_pdf(expenses: &[Expense]) -> ExpenseResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Expenses",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Table",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExpenseError::Export(format!("Failed to load PDF font: {:?}", e)))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExpenseError::Export(format!("Failed to load PDF font: {:?}", e)))?;

    let canvas = doc.get_page(page).get_layer(layer);
    let layout = TableLayout::for_rows(expenses.len());

    let header_y = layout.baseline(0);
    for (column, x) in EXPORT_COLUMNS.iter().zip(COLUMN_X) {
        canvas.use_text(*column, layout.font_size, Mm(x), Mm(header_y), &bold);
    }

    let rule_y = header_y - layout.row_height * 0.3;
    canvas.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN), Mm(rule_y)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(rule_y)), false),
        ],
        is_closed: false,
    });

    for (index, expense) in expenses.iter().enumerate() {
        let y = layout.baseline(index + 1);
        for (cell, x) in table_row(expense).iter().zip(COLUMN_X) {
            canvas.use_text(cell.as_str(), layout.font_size, Mm(x), Mm(y), &regular);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| ExpenseError::Export(format!("Failed to render PDF: {:?}", e)))
}

impl Exporter for PdfExporter {
    fn write_to_path(&self, snapshot: &ExportSnapshot, destination: &Path) -> ExpenseResult<()> {
        let bytes = render_expenses_pdf(&snapshot.expenses)?;
        std::fs::write(destination, bytes).map_err(|e| {
            ExpenseError::Export(format!(
                "Failed to create file {}: {}",
                destination.display(),
                e
            ))
        })
    }
}
