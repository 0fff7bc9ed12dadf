use crate::error::{Result, SegregateError};
use crate::grid::Grid;
use crate::utils::{col_name_to_index, index_to_col_name};

/// A parsed `--column` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSpec {
    /// 1-based column number, e.g. `6`
    Index(u64),
    /// Column letters, e.g. `F` or `aa`
    Letters(String),
    /// Header text to look up in the header band
    Header(String),
}

impl ColumnSpec {
    pub fn parse(spec: &str) -> Self {
        let s = spec.trim();

        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            // Overlong numbers can never be in range anyway
            return ColumnSpec::Index(s.parse().unwrap_or(u64::MAX));
        }

        if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
            return ColumnSpec::Letters(s.to_string());
        }

        ColumnSpec::Header(s.to_string())
    }

    // Index against 1..=available; letters outside the sheet fall back to header text
    fn position(&self, spec: &str, available: u32) -> Option<Result<u32>> {
        match self {
            ColumnSpec::Index(index) => {
                let index = u32::try_from(*index).unwrap_or(u32::MAX);
                if index == 0 || index > available {
                    return Some(Err(SegregateError::ColumnResolution {
                        spec: spec.to_string(),
                        reason: format!("Column index {} is out of range (1..{})", spec.trim(), available),
                    }));
                }
                Some(Ok(index))
            }
            ColumnSpec::Letters(letters) => col_name_to_index(letters)
                .filter(|index| (1..=available).contains(index))
                .map(Ok),
            ColumnSpec::Header(_) => None,
        }
    }
}

/// Resolves `spec` against a list of column labels (one per column, in order).
///
/// Letters outside the labelled columns are treated as header text, which matches exactly
/// first, then case-insensitively on the trimmed label. Returns the 1-based column number.
pub fn resolve_in_labels(spec: &str, labels: &[String]) -> Result<u32> {
    let parsed = ColumnSpec::parse(spec);

    if let Some(position) = parsed.position(spec, labels.len() as u32) {
        return position;
    }

    let wanted = spec.trim();
    let lowered = wanted.to_lowercase();

    labels
        .iter()
        .position(|label| label == wanted)
        .or_else(|| {
            labels
                .iter()
                .position(|label| label.trim().to_lowercase() == lowered)
        })
        .map(|idx| idx as u32 + 1)
        .ok_or_else(|| SegregateError::ColumnResolution {
            spec: spec.to_string(),
            reason: format!("not a column letter or label. Available columns: {:?}", labels),
        })
}

/// Resolves `spec` directly on a sheet.
///
/// Letters past the last used column are treated as header text. Header text is searched
/// in rows `1..=header_rows`, row by row and left to right; the first cell whose trimmed
/// text equals the spec case-insensitively wins. Returns the 1-based column number.
pub fn resolve_in_sheet<G: Grid + ?Sized>(grid: &G, spec: &str, header_rows: u32) -> Result<u32> {
    let max_col = grid.max_column();
    let parsed = ColumnSpec::parse(spec);

    if let Some(position) = parsed.position(spec, max_col) {
        return position;
    }

    let wanted = spec.trim().to_lowercase();
    let last_header_row = header_rows.min(grid.max_row());

    for row in 1..=last_header_row {
        for col in 1..=max_col {
            if let Some(text) = grid.text(row, col)
                && text.trim().to_lowercase() == wanted
            {
                return Ok(col);
            }
        }
    }

    Err(SegregateError::ColumnResolution {
        spec: spec.to_string(),
        reason: format!(
            "not a column in A..{} and no header cell in rows 1..={} matches",
            index_to_col_name(max_col),
            header_rows
        ),
    })
}

/// Column labels as a data-frame would see them: for each column, the lowest non-blank
/// cell of the header band, trimmed. Columns without any header text get an empty label.
pub fn header_labels<G: Grid + ?Sized>(grid: &G, header_rows: u32) -> Vec<String> {
    let last_header_row = header_rows.min(grid.max_row());

    (1..=grid.max_column())
        .map(|col| {
            (1..=last_header_row)
                .rev()
                .find_map(|row| {
                    grid.text(row, col)
                        .map(|text| text.trim().to_string())
                        .filter(|text| !text.is_empty())
                })
                .unwrap_or_default()
        })
        .collect()
}
