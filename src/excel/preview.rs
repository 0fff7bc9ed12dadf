use std::borrow::Cow;
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SegregateError};
use crate::grid::Grid;
use crate::options::{SegregateOptions, SheetSelector};
use crate::report::{KeyColumn, SheetSummary};
use crate::segregate::{SheetNamer, group_rows, header_labels, resolve_in_sheet};

/// What a run would produce, computed from cell values only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    /// Every sheet in the workbook, in order
    pub sheets: Vec<String>,
    pub source_sheet: String,
    pub header_rows: u32,
    pub last_row: u32,
    pub last_column: u32,
    /// Per-column label: the lowest non-blank header cell of each column
    pub labels: Vec<String>,
    pub key_column: KeyColumn,
    pub key_label: Option<String>,
    pub output_sheets: Vec<SheetSummary>,
    pub skipped_blank: usize,
}

impl Grid for Range<Data> {
    fn max_row(&self) -> u32 {
        self.end().map_or(0, |(row, _)| row + 1)
    }

    fn max_column(&self) -> u32 {
        self.end().map_or(0, |(_, col)| col + 1)
    }

    fn text(&self, row: u32, col: u32) -> Option<Cow<'_, str>> {
        let value = self.get_value((row.checked_sub(1)?, col.checked_sub(1)?))?;
        data_to_text(value).map(Cow::Owned)
    }
}

// Same text a styled reader reports for the cell
fn data_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::Error(e) => Some(format!("{:?}", e)),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}

/// Reads the value grid of the selected sheet along with the workbook's sheet names.
pub fn read_value_range<P: AsRef<Path>>(
    path: P,
    selector: &SheetSelector,
) -> Result<(Vec<String>, String, Range<Data>)> {
    let path = path.as_ref();
    let load_error = |cause: String| SegregateError::Load {
        source_name: path.display().to_string(),
        cause,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| load_error(e.to_string()))?;
    let sheets = workbook.sheet_names().to_vec();

    let name = match selector {
        SheetSelector::First => sheets.first().cloned(),
        SheetSelector::Index(index) => sheets.get(*index).cloned(),
        SheetSelector::Name(name) => sheets.iter().find(|s| s.as_str() == name.as_str()).cloned(),
    }
    .ok_or_else(|| SegregateError::SheetNotFound {
        requested: selector.to_string(),
        available: sheets.clone(),
    })?;

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| load_error(e.to_string()))?;

    Ok((sheets, name, range))
}

/// Dry run: resolves the key column and groups rows exactly like the real run, without
/// building or writing any output.
pub fn preview<P: AsRef<Path>>(path: P, options: &SegregateOptions) -> Result<Preview> {
    let (sheets, name, range) = read_value_range(path, &options.sheet)?;
    debug!("Previewing sheet {}", name);
    preview_range(sheets, name, &range, options)
}

pub fn preview_range<G: Grid + ?Sized>(
    sheets: Vec<String>,
    source_sheet: String,
    grid: &G,
    options: &SegregateOptions,
) -> Result<Preview> {
    let header_rows = options.header_rows;
    let labels = header_labels(grid, header_rows);

    let key_col = resolve_in_sheet(grid, &options.column, header_rows)?;
    let grouped = group_rows(grid, key_col, header_rows)?;

    let mut namer = SheetNamer::new();
    let output_sheets = grouped
        .groups
        .iter()
        .map(|(code, rows)| SheetSummary {
            code: code.clone(),
            sheet_name: namer.assign(Some(code)),
            rows: rows.len(),
        })
        .collect();

    let key_label = labels
        .get(key_col as usize - 1)
        .filter(|label| !label.is_empty())
        .cloned();

    Ok(Preview {
        sheets,
        source_sheet,
        header_rows,
        last_row: grid.max_row(),
        last_column: grid.max_column(),
        labels,
        key_column: KeyColumn::new(key_col),
        key_label,
        output_sheets,
        skipped_blank: grouped.skipped_blank,
    })
}
