use std::collections::HashSet;

pub const MAX_SHEET_NAME_LEN: usize = 31;
pub const BLANK_PLACEHOLDER: &str = "Blank";
const EMPTY_PLACEHOLDER: &str = "Sheet";
const INVALID_CHARS: [char; 7] = [':', '\\', '/', '?', '*', '[', ']'];

/// Hands out sheet titles that are safe to use and unique within one workbook.
///
/// Uniqueness is case-insensitive, matching how spreadsheet applications compare titles.
#[derive(Debug, Default)]
pub struct SheetNamer {
    used: HashSet<String>,
}

impl SheetNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the title for `key` and records it as taken.
    pub fn assign(&mut self, key: Option<&str>) -> String {
        let base = sanitize(key);

        let mut candidate = base.clone();
        let mut i = 1;
        while self.used.contains(&candidate.to_lowercase()) {
            let suffix = format!("_{}", i);
            let room = MAX_SHEET_NAME_LEN - suffix.chars().count();
            candidate = format!("{}{}", truncate_chars(&base, room), suffix);
            i += 1;
        }

        self.used.insert(candidate.to_lowercase());
        candidate
    }
}

/// Title for `key` without the uniqueness step.
#[must_use]
pub fn sanitize(key: Option<&str>) -> String {
    let raw = match key {
        Some(k) if !k.is_empty() => k,
        _ => BLANK_PLACEHOLDER,
    };

    let replaced: String = raw
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect();

    if replaced.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    truncate_chars(&replaced, MAX_SHEET_NAME_LEN).to_string()
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
