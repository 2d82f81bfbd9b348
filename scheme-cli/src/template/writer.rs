//! Write the scheme template to Excel

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::import::SchemeField;

/// Output file used when no path is given
pub const DEFAULT_TEMPLATE_PATH: &str = "schemes_template.xlsx";

/// Worksheet title
pub const TEMPLATE_SHEET: &str = "Schemes";

/// Example data row, in [`SchemeField::ALL`] order
pub const EXAMPLE_ROW: [&str; 14] = [
    "PMEGP",
    "subsidy",
    "Credit-linked capital subsidy for micro enterprises. Margin money assistance.",
    "Up to 25% margin money subsidy",
    "*",
    "Business plan; Identity proof; Address proof; Bank statement",
    "4-6 weeks from application",
    "micro, small",
    "",
    "100",
    "",
    "3",
    "",
    "subsidy",
];

/// Header labels, in template column order
pub fn header_row() -> Vec<&'static str> {
    SchemeField::ALL.iter().map(|f| f.label()).collect()
}

/// Write the template workbook
pub fn write_template(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(TEMPLATE_SHEET)?;
    write_header(worksheet)?;
    write_example(worksheet)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Template written to: {}", path.display());
    Ok(())
}

fn write_header(ws: &mut Worksheet) -> Result<()> {
    let bold = Format::new().set_bold();
    for (col, label) in header_row().into_iter().enumerate() {
        ws.write_string_with_format(0, col as u16, label, &bold)?;
    }
    Ok(())
}

fn write_example(ws: &mut Worksheet) -> Result<()> {
    for (col, value) in EXAMPLE_ROW.iter().enumerate() {
        // Leave blank cells empty rather than writing ""
        if !value.is_empty() {
            ws.write_string(1, col as u16, *value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{parse_header, read_sheet_rows};

    #[test]
    fn test_header_recognised_by_import() {
        let map = parse_header(&header_row());
        assert_eq!(map.len(), SchemeField::ALL.len());
        assert!(map.missing_required().is_empty());
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.xlsx");
        write_template(&path).unwrap();

        let sheet = read_sheet_rows(&path, None).unwrap();
        assert_eq!(sheet.sheet_name, TEMPLATE_SHEET);
        assert_eq!(sheet.header, header_row());
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0][0], "PMEGP");
        assert_eq!(sheet.rows[0][9], "100");
    }
}
