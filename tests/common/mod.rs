#![allow(dead_code)]

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use umya_spreadsheet::{Spreadsheet, Worksheet};

pub const HEADER_ROWS: u32 = 2;

/// Customer codes in column F for data rows 3..=8; `None` leaves the cell out.
pub const CODES: [Option<&str>; 6] = [Some("A"), Some("B"), Some("A"), None, Some(" "), Some("C")];

pub const LABELS: [&str; 6] = ["Date", "Invoice", "Item", "Qty", "Amount", "Customer Code"];

/// Two header rows (merged bold title, then labels) and six data rows.
pub fn orders_book() -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let ws = book.new_sheet("Orders").unwrap();

    let title = ws.get_cell_mut((1, 1));
    title.set_value_string("Monthly orders");
    title.get_style_mut().get_font_mut().set_bold(true);
    ws.add_merge_cells("A1:F1");
    ws.get_row_dimension_mut(&1).set_height(30.0);

    for (idx, label) in LABELS.iter().enumerate() {
        let cell = ws.get_cell_mut((idx as u32 + 1, 2));
        cell.set_value_string(*label);
        cell.get_style_mut().get_font_mut().set_bold(true);
    }

    ws.get_column_dimension_by_number_mut(&2).set_width(14.0);
    ws.get_column_dimension_by_number_mut(&6).set_width(22.0);

    for (idx, code) in CODES.iter().enumerate() {
        let row = idx as u32 + 3;
        ws.get_cell_mut((1, row)).set_value_string("2024-01-31");
        ws.get_cell_mut((2, row)).set_value_string(format!("INV-{}", row));
        ws.get_cell_mut((3, row)).set_value_string("Widget");
        ws.get_cell_mut((4, row)).set_value_number(row as f64);

        let amount = ws.get_cell_mut((5, row));
        amount.set_value_number(row as f64 * 10.5);
        amount.get_style_mut().get_number_format_mut().set_format_code("0.00");

        if let Some(code) = code {
            ws.get_cell_mut((6, row)).set_value_string(*code);
        }
    }

    // Data-band merge; must not reach the output
    ws.add_merge_cells("A8:B8");
    ws.get_row_dimension_mut(&5).set_height(24.0);

    book
}

pub fn text(ws: &Worksheet, row: u32, col: u32) -> String {
    ws.get_cell((col, row))
        .map(|c| c.get_value().to_string())
        .unwrap_or_default()
}

pub fn is_bold(ws: &Worksheet, row: u32, col: u32) -> bool {
    ws.get_cell((col, row))
        .and_then(|c| c.get_style().get_font())
        .map(|f| *f.get_bold())
        .unwrap_or(false)
}

pub fn merges(ws: &Worksheet) -> Vec<String> {
    ws.get_merge_cells().iter().map(|r| r.get_range()).collect()
}

pub fn column_width(ws: &Worksheet, col: u32) -> Option<f64> {
    ws.get_column_dimensions()
        .iter()
        .find(|c| *c.get_col_num() == col)
        .map(|c| *c.get_width())
}

pub fn row_height(ws: &Worksheet, row: u32) -> Option<f64> {
    ws.get_row_dimension(&row).map(|r| *r.get_height())
}

pub fn frozen_top_left(ws: &Worksheet) -> Option<String> {
    ws.get_sheets_views()
        .get_sheet_view_list()
        .first()
        .and_then(|view| view.get_pane())
        .map(|pane| pane.get_top_left_cell().get_coordinate())
}

pub fn sheet_titles(book: &Spreadsheet) -> Vec<String> {
    book.get_sheet_collection_no_check()
        .iter()
        .map(|s| s.get_name().to_string())
        .collect()
}

/// Same layout as `orders_book`, authored with rust_xlsxwriter and numeric codes.
pub fn write_orders_xlsx(path: &Path) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet().set_name("Orders")?;
    worksheet.merge_range(0, 0, 0, 5, "Monthly orders", &bold)?;
    worksheet.set_row_height(0, 30)?;
    for (idx, label) in LABELS.iter().enumerate() {
        worksheet.write_string_with_format(1, idx as u16, *label, &bold)?;
    }
    worksheet.set_column_width(5, 22)?;

    let codes: [Option<f64>; 6] = [Some(1001.0), Some(1002.0), Some(1001.0), None, None, Some(1003.0)];
    for (idx, code) in codes.iter().enumerate() {
        let row = idx as u32 + 2;
        worksheet.write_string(row, 0, "2024-01-31")?;
        worksheet.write_string(row, 1, format!("INV-{}", row + 1))?;
        worksheet.write_number(row, 4, f64::from(row) * 10.5)?;
        if let Some(code) = code {
            worksheet.write_number(row, 5, *code)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
