mod grouper;
mod layout;
mod resolver;
mod rows;
mod sheet_name;

use std::path::Path;

use tracing::{debug, info, warn};
use umya_spreadsheet::Spreadsheet;

use crate::error::{Result, SegregateError};
use crate::excel::{load_workbook, load_workbook_from_bytes, save_workbook, select_sheet, workbook_to_bytes};
use crate::options::SegregateOptions;
use crate::report::{KeyColumn, SegregateReport, SheetSummary};

pub use grouper::{RowGroups, group_rows};
pub use layout::{copy_cell, copy_header_and_layout, copy_row_height, freeze_below};
pub use resolver::{ColumnSpec, header_labels, resolve_in_labels, resolve_in_sheet};
pub use rows::copy_rows;
pub use sheet_name::{BLANK_PLACEHOLDER, MAX_SHEET_NAME_LEN, SheetNamer, sanitize};

/// Builds the split workbook in memory: one sheet per customer code, each with the source
/// header band and that code's rows.
pub fn segregate_book(book: &Spreadsheet, options: &SegregateOptions) -> Result<(Spreadsheet, SegregateReport)> {
    let src = select_sheet(book, &options.sheet)?;
    let header_rows = options.header_rows;

    let key_col = resolve_in_sheet(src, &options.column, header_rows)?;
    let key_column = KeyColumn::new(key_col);
    info!(
        "Splitting sheet '{}' by column {} ({} header rows)",
        src.get_name(),
        key_column.letter,
        header_rows
    );

    let grouped = group_rows(src, key_col, header_rows)?;
    if grouped.skipped_blank > 0 {
        warn!("Skipped {} rows with a blank customer code", grouped.skipped_blank);
    }

    let max_col = src.get_highest_column();
    let mut out = umya_spreadsheet::new_file_empty_worksheet();
    let mut namer = SheetNamer::new();
    let mut sheets = Vec::with_capacity(grouped.len());

    for (code, rows) in &grouped.groups {
        let name = namer.assign(Some(code));
        let dst = out
            .new_sheet(name.clone())
            .map_err(|e| SegregateError::CreateSheet {
                name: name.clone(),
                cause: e.to_string(),
            })?;

        copy_header_and_layout(src, dst, header_rows);
        copy_rows(src, dst, rows, header_rows + 1, max_col);
        debug!("Wrote {} rows for code '{}' to sheet '{}'", rows.len(), code, name);

        sheets.push(SheetSummary {
            code: code.clone(),
            sheet_name: name,
            rows: rows.len(),
        });
    }

    info!("Created {} sheets from {} rows", sheets.len(), grouped.row_count());

    let report = SegregateReport {
        source_sheet: src.get_name().to_string(),
        key_column,
        header_rows,
        sheets,
        skipped_blank: grouped.skipped_blank,
        output: None,
    };

    Ok((out, report))
}

/// Splits the workbook at `input` and saves the result to the configured (or derived)
/// output path. Nothing is written unless every group was built.
pub fn segregate<P: AsRef<Path>>(input: P, options: &SegregateOptions) -> Result<SegregateReport> {
    let input = input.as_ref();
    let book = load_workbook(input)?;
    let (out, mut report) = segregate_book(&book, options)?;

    let output_path = options.output_path_for(input);
    save_workbook(&out, &output_path)?;
    info!("Saved {}", output_path.display());

    report.output = Some(output_path);
    Ok(report)
}

/// In-memory variant for callers holding an uploaded file.
pub fn segregate_bytes(input: &[u8], options: &SegregateOptions) -> Result<(Vec<u8>, SegregateReport)> {
    let book = load_workbook_from_bytes(input)?;
    let (out, report) = segregate_book(&book, options)?;
    Ok((workbook_to_bytes(&out)?, report))
}
