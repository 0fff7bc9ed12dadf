use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_COLUMN: &str = "F";
pub const DEFAULT_HEADER_ROWS: u32 = 8;
const OUTPUT_SUFFIX: &str = "_segregated";

/// Which sheet of the input workbook to split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SheetSelector {
    #[default]
    First,
    /// 0-based position in the workbook
    Index(usize),
    Name(String),
}

impl FromStr for SheetSelector {
    type Err = Infallible;

    // Numbers are positions, anything else is a sheet name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<usize>() {
            Ok(index) => SheetSelector::Index(index),
            Err(_) => SheetSelector::Name(s.to_string()),
        })
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::First => write!(f, "first sheet"),
            SheetSelector::Index(index) => write!(f, "#{}", index),
            SheetSelector::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Parameters of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegregateOptions {
    pub sheet: SheetSelector,
    /// Column letter, 1-based index, or header text
    pub column: String,
    /// Rows at the top copied verbatim into every output sheet
    pub header_rows: u32,
    /// Output file; derived from the input path when absent
    pub output: Option<PathBuf>,
}

impl Default for SegregateOptions {
    fn default() -> Self {
        Self {
            sheet: SheetSelector::First,
            column: DEFAULT_COLUMN.to_string(),
            header_rows: DEFAULT_HEADER_ROWS,
            output: None,
        }
    }
}

impl SegregateOptions {
    /// The output path for `input`: the explicit one if set, otherwise `<stem>_segregated<ext>`
    /// next to the input.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => default_output_path(input),
        }
    }
}

#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let file_stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("workbook");
    let extension = input
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("xlsx");
    let parent_dir = input.parent().unwrap_or_else(|| Path::new(""));

    parent_dir.join(format!("{}{}.{}", file_stem, OUTPUT_SUFFIX, extension))
}
