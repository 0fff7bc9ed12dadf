use std::borrow::Cow;

/// Read-only view over a sheet's cell text, addressed with 1-based (row, col) pairs.
///
/// Column resolution and row grouping only need cell text, so they run over this trait
/// instead of a concrete spreadsheet model. The styled writer path and the value-only
/// preview path share the same rules that way.
pub trait Grid {
    /// Last used row, 0 for an empty sheet
    fn max_row(&self) -> u32;

    /// Last used column, 0 for an empty sheet
    fn max_column(&self) -> u32;

    /// Display text of a cell, `None` when the cell does not exist
    fn text(&self, row: u32, col: u32) -> Option<Cow<'_, str>>;
}
