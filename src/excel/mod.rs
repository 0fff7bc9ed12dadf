mod preview;
mod workbook;

pub use preview::{Preview, preview, preview_range, read_value_range};
pub use workbook::{
    load_workbook, load_workbook_from_bytes, save_workbook, select_sheet, sheet_names,
    workbook_to_bytes,
};
