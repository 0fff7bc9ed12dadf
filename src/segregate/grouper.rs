use indexmap::IndexMap;

use crate::error::{Result, SegregateError};
use crate::grid::Grid;
use crate::utils::index_to_col_name;

/// Data rows bucketed by key, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowGroups {
    pub groups: IndexMap<String, Vec<u32>>,
    /// Data rows dropped because their key cell was empty or whitespace
    pub skipped_blank: usize,
}

impl RowGroups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Groups rows `header_rows + 1..=max_row` by the text in `key_col`.
///
/// Keys are kept untrimmed; rows whose key trims to nothing are skipped.
pub fn group_rows<G: Grid + ?Sized>(grid: &G, key_col: u32, header_rows: u32) -> Result<RowGroups> {
    let last_row = grid.max_row();
    if last_row <= header_rows {
        return Err(SegregateError::NoDataRows {
            header_rows,
            last_row,
        });
    }

    let mut result = RowGroups::default();

    for row in (header_rows + 1)..=last_row {
        match grid.text(row, key_col) {
            Some(code) if !code.trim().is_empty() => {
                result
                    .groups
                    .entry(code.into_owned())
                    .or_default()
                    .push(row);
            }
            _ => result.skipped_blank += 1,
        }
    }

    if result.is_empty() {
        return Err(SegregateError::NoGroups {
            column: index_to_col_name(key_col),
        });
    }

    Ok(result)
}
