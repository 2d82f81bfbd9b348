//! Spreadsheet input for the scheme import

mod reader;

pub use reader::{SheetRows, cell_to_string, read_sheet_rows};
