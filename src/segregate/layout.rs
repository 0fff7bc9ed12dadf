use tracing::debug;
use umya_spreadsheet::structs::{Coordinate, Pane, PaneStateValues, PaneValues, SheetView};
use umya_spreadsheet::Worksheet;

use crate::utils::{cell_reference, range_top_row};

/// Copies the value and style of one cell into another worksheet.
///
/// The style is cloned, so the destination owns its own font, fill, border, alignment,
/// protection and number format. Missing source cells leave the destination untouched.
pub fn copy_cell(src: &Worksheet, dst: &mut Worksheet, from: (u32, u32), to: (u32, u32)) {
    let (from_row, from_col) = from;
    let (to_row, to_col) = to;

    let Some(src_cell) = src.get_cell((from_col, from_row)) else {
        return;
    };

    let dest_cell = dst.get_cell_mut((to_col, to_row));
    dest_cell.set_cell_value(src_cell.get_cell_value().clone());
    dest_cell.set_style(src_cell.get_style().clone());
}

/// Copies the height of `from_row` onto `to_row` when the source row has one set.
pub fn copy_row_height(src: &Worksheet, dst: &mut Worksheet, from_row: u32, to_row: u32) {
    if let Some(row) = src.get_row_dimension(&from_row) {
        let height = *row.get_height();
        if height > 0.0 {
            let dest_row = dst.get_row_dimension_mut(&to_row);
            dest_row.set_height(height);
            dest_row.set_custom_height(true);
        }
    }
}

/// Replicates the header band and sheet layout of `src` into `dst`: column widths, header
/// row heights, header cells with their styles, merges starting inside the header band, and
/// a freeze pane right below it.
pub fn copy_header_and_layout(src: &Worksheet, dst: &mut Worksheet, header_rows: u32) {
    let max_col = src.get_highest_column();

    // Column widths
    for column in src.get_column_dimensions() {
        dst.get_column_dimension_by_number_mut(column.get_col_num())
            .set_width(*column.get_width());
    }

    // Header cells and row heights
    for row in 1..=header_rows {
        copy_row_height(src, dst, row, row);
        for col in 1..=max_col {
            copy_cell(src, dst, (row, col), (row, col));
        }
    }

    // Merges that start in the header band
    for merge in src.get_merge_cells() {
        let range = merge.get_range();
        match range_top_row(&range) {
            Some(top) if top <= header_rows => {
                dst.add_merge_cells(range);
            }
            Some(_) => {}
            None => debug!("Skipping unparseable merge range {}", range),
        }
    }

    freeze_below(dst, header_rows);
}

/// Freezes rows `1..=rows` so they stay visible while scrolling. No-op for 0 rows.
pub fn freeze_below(ws: &mut Worksheet, rows: u32) {
    if rows == 0 {
        return;
    }

    let top_left = cell_reference((rows + 1, 1));

    let mut top_left_cell = Coordinate::default();
    top_left_cell.set_coordinate(top_left.as_str());

    let mut pane = Pane::default();
    pane.set_vertical_split(f64::from(rows));
    pane.set_top_left_cell(top_left_cell);
    pane.set_active_pane(PaneValues::BottomLeft);
    pane.set_state(PaneStateValues::Frozen);

    let views = ws.get_sheet_views_mut().get_sheet_view_list_mut();
    if views.is_empty() {
        views.push(SheetView::default());
    }
    views[0].set_pane(pane);
}
