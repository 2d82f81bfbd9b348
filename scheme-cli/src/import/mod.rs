//! Spreadsheet to SQL conversion for funding schemes
//!
//! Pipeline, per data row: header mapping, cell normalization, eligibility
//! rules, SQL literal encoding, statement emission.

pub mod eligibility;
pub mod emit;
pub mod excel;
pub mod header;
pub mod sql;
pub mod values;

use std::path::Path;

use anyhow::{Result, bail};

pub use eligibility::{EligibilityRules, build_eligibility_rules};
pub use emit::{
    ImportReport, InsertStatement, NoValidRows, RowError, SchemeRecord, SchemeType, SkippedRow,
    emit_statements, render_script,
};
pub use excel::{SheetRows, read_sheet_rows};
pub use header::{ColumnMap, SchemeField, parse_header};

/// Convert already-read sheet rows into insert statements
pub fn convert_sheet(sheet: &SheetRows, table: &str) -> Result<ImportReport> {
    let columns = parse_header(&sheet.header);
    log::debug!(
        "Sheet '{}': {} of {} header columns recognised",
        sheet.sheet_name,
        columns.len(),
        sheet.header.len()
    );

    let missing = columns.missing_required();
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        bail!(
            "Sheet must have columns: Name, Type, Benefit Summary (missing: {})",
            labels.join(", ")
        );
    }

    emit_statements(&sheet.rows, &columns, table, sheet.first_data_row_number())
}

/// Read a workbook and convert its scheme sheet
pub fn convert_workbook(path: &Path, sheet: Option<&str>, table: &str) -> Result<ImportReport> {
    let rows = read_sheet_rows(path, sheet)?;
    convert_sheet(&rows, table)
}
