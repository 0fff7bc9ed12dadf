pub mod error;
pub mod excel;
pub mod grid;
pub mod options;
pub mod report;
pub mod segregate;
pub mod utils;

pub use error::{Result, SegregateError};
pub use excel::{Preview, preview};
pub use options::{SegregateOptions, SheetSelector};
pub use report::{KeyColumn, SegregateReport, SheetSummary};
pub use segregate::{segregate, segregate_book, segregate_bytes};
