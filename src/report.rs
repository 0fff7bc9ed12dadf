use std::path::PathBuf;

use serde::Serialize;

use crate::utils::index_to_col_name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyColumn {
    /// 1-based column number
    pub index: u32,
    pub letter: String,
}

impl KeyColumn {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            letter: index_to_col_name(index),
        }
    }
}

/// One output sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    pub code: String,
    pub sheet_name: String,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegregateReport {
    pub source_sheet: String,
    pub key_column: KeyColumn,
    pub header_rows: u32,
    pub sheets: Vec<SheetSummary>,
    pub skipped_blank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl SegregateReport {
    pub fn total_rows(&self) -> usize {
        self.sheets.iter().map(|s| s.rows).sum()
    }
}
