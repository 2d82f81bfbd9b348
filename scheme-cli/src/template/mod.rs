//! Template workbook: header row plus one example scheme

mod writer;

pub use writer::{DEFAULT_TEMPLATE_PATH, EXAMPLE_ROW, TEMPLATE_SHEET, header_row, write_template};
