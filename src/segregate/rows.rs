use umya_spreadsheet::Worksheet;

use super::layout::{copy_cell, copy_row_height};

/// Copies `rows` of `src` (in the given order) into `dst`, packed contiguously from
/// `first_row`. Every column up to `max_col` is copied with its value and style.
///
/// Returns the row after the last one written.
pub fn copy_rows(src: &Worksheet, dst: &mut Worksheet, rows: &[u32], first_row: u32, max_col: u32) -> u32 {
    let mut out_row = first_row;

    for &row in rows {
        copy_row_height(src, dst, row, out_row);
        for col in 1..=max_col {
            copy_cell(src, dst, (row, col), (out_row, col));
        }
        out_row += 1;
    }

    out_row
}
