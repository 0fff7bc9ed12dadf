use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::error::{Result, SegregateError};
use crate::grid::Grid;
use crate::options::SheetSelector;

impl Grid for Worksheet {
    fn max_row(&self) -> u32 {
        self.get_highest_row()
    }

    fn max_column(&self) -> u32 {
        self.get_highest_column()
    }

    fn text(&self, row: u32, col: u32) -> Option<Cow<'_, str>> {
        self.get_cell((col, row)).map(|cell| cell.get_value())
    }
}

/// Opens a workbook with styles, merges and dimensions for copying.
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<Spreadsheet> {
    let path = path.as_ref();
    debug!("Loading workbook {}", path.display());

    umya_spreadsheet::reader::xlsx::read(path).map_err(|e| SegregateError::Load {
        source_name: path.display().to_string(),
        cause: e.to_string(),
    })
}

pub fn load_workbook_from_bytes(bytes: &[u8]) -> Result<Spreadsheet> {
    umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true).map_err(|e| {
        SegregateError::Load {
            source_name: "<memory>".to_string(),
            cause: e.to_string(),
        }
    })
}

pub fn sheet_names(book: &Spreadsheet) -> Vec<String> {
    book.get_sheet_collection_no_check()
        .iter()
        .map(|s| s.get_name().to_string())
        .collect()
}

pub fn select_sheet<'a>(book: &'a Spreadsheet, selector: &SheetSelector) -> Result<&'a Worksheet> {
    let sheets = book.get_sheet_collection_no_check();

    let found = match selector {
        SheetSelector::First => sheets.first(),
        SheetSelector::Index(index) => sheets.get(*index),
        SheetSelector::Name(name) => sheets.iter().find(|s| s.get_name() == name),
    };

    found.ok_or_else(|| SegregateError::SheetNotFound {
        requested: selector.to_string(),
        available: sheet_names(book),
    })
}

/// Writes `book` to `path` through a temporary file in the same directory, so the target
/// either keeps its previous content or receives the complete workbook.
pub fn save_workbook<P: AsRef<Path>>(book: &Spreadsheet, path: P) -> Result<()> {
    let path = path.as_ref();
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent_dir)?;
    umya_spreadsheet::writer::xlsx::write_writer(book, tmp.as_file_mut()).map_err(|e| {
        SegregateError::Save {
            path: path.to_path_buf(),
            cause: e.to_string(),
        }
    })?;

    tmp.persist(path).map_err(|e| SegregateError::Save {
        path: path.to_path_buf(),
        cause: e.error.to_string(),
    })?;

    debug!("Saved workbook {}", path.display());
    Ok(())
}

pub fn workbook_to_bytes(book: &Spreadsheet) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(book, &mut cursor).map_err(|e| {
        SegregateError::Save {
            path: "<memory>".into(),
            cause: e.to_string(),
        }
    })?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sheet_book() -> Spreadsheet {
        let mut book = umya_spreadsheet::new_file_empty_worksheet();
        book.new_sheet("Orders").unwrap();
        book.new_sheet("Notes").unwrap();
        book
    }

    #[test]
    fn selects_sheets_by_position_and_name() {
        let book = two_sheet_book();

        assert_eq!(select_sheet(&book, &SheetSelector::First).unwrap().get_name(), "Orders");
        assert_eq!(select_sheet(&book, &SheetSelector::Index(1)).unwrap().get_name(), "Notes");
        assert_eq!(
            select_sheet(&book, &SheetSelector::Name("Notes".to_string()))
                .unwrap()
                .get_name(),
            "Notes"
        );
    }

    #[test]
    fn unknown_sheet_lists_available_ones() {
        let book = two_sheet_book();
        let err = select_sheet(&book, &SheetSelector::Index(5)).unwrap_err();

        match err {
            SegregateError::SheetNotFound { available, .. } => {
                assert_eq!(available, vec!["Orders".to_string(), "Notes".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn garbage_bytes_are_a_load_error() {
        let err = load_workbook_from_bytes(b"not a zip archive").unwrap_err();
        assert!(matches!(err, SegregateError::Load { .. }));
    }
}
