use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while splitting a workbook. Every variant aborts the run before any output
/// is written.
#[derive(Debug, Error)]
pub enum SegregateError {
    /// The column specifier matched nothing usable
    #[error("Could not resolve column '{spec}': {reason}")]
    ColumnResolution { spec: String, reason: String },

    #[error("Sheet '{requested}' not found. Available sheets: {available:?}")]
    SheetNotFound {
        requested: String,
        available: Vec<String>,
    },

    #[error(
        "The input sheet has no data rows below the header (header rows: {header_rows}, last row: {last_row})"
    )]
    NoDataRows { header_rows: u32, last_row: u32 },

    #[error("No customer codes found in column {column}")]
    NoGroups { column: String },

    #[error("Unable to read workbook {source_name}: {cause}")]
    Load { source_name: String, cause: String },

    #[error("Unable to create sheet '{name}': {cause}")]
    CreateSheet { name: String, cause: String },

    #[error("Unable to write workbook {}: {cause}", .path.display())]
    Save { path: PathBuf, cause: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SegregateError>;
