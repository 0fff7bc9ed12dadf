/// Converts a 1-based column number to its letter label (1 -> "A", 28 -> "AB").
#[must_use]
pub fn index_to_col_name(index: u32) -> String {
    let mut col_name = String::new();
    let mut n = index;

    while n > 0 {
        let remainder = (n - 1) % 26;
        col_name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    if col_name.is_empty() {
        col_name.push('A');
    }

    col_name
}

/// Converts column letters to a 1-based column number, case-insensitively.
///
/// Returns `None` for empty input, non-letters, or labels too long to fit in a `u32`.
#[must_use]
pub fn col_name_to_index(name: &str) -> Option<u32> {
    if name.is_empty() {
        return None;
    }

    let mut result: u32 = 0;

    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }

        let val = u32::from(c.to_ascii_uppercase() as u8 - b'A' + 1);
        result = result.checked_mul(26)?.checked_add(val)?;
    }

    Some(result)
}

// Format cell reference (e.g., A1, B2) from a (row, col) pair
#[must_use]
pub fn cell_reference(cell: (u32, u32)) -> String {
    format!("{}{}", index_to_col_name(cell.1), cell.0)
}

/// Parses an A1-style reference, ignoring `$` anchors, into a 1-based (row, col) pair.
#[must_use]
pub fn parse_cell_reference(reference: &str) -> Option<(u32, u32)> {
    let cleaned: String = reference.trim().chars().filter(|c| *c != '$').collect();
    let split = cleaned.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = cleaned.split_at(split);

    let col = col_name_to_index(letters)?;
    let row = digits.parse::<u32>().ok().filter(|r| *r > 0)?;

    Some((row, col))
}

/// Returns the first row of a range such as `A1:D2` (or a single cell like `B3`).
#[must_use]
pub fn range_top_row(range: &str) -> Option<u32> {
    let mut rows = range
        .split(':')
        .map(|part| parse_cell_reference(part).map(|(row, _)| row));

    let first = rows.next()??;
    rows.try_fold(first, |top, row| row.map(|r| top.min(r)))
}
