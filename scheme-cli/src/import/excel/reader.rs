//! Read a worksheet into rows of trimmed cell text

use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};

/// Header and data rows of one worksheet, all cells as trimmed text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRows {
    pub sheet_name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// 1-based spreadsheet row number of the header
    pub header_row_number: usize,
}

impl SheetRows {
    /// 1-based spreadsheet row number of the first data row
    pub fn first_data_row_number(&self) -> usize {
        self.header_row_number + 1
    }
}

/// Text form of date cells
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a cell to trimmed text. Whole numbers lose their fractional part,
/// dates become `YYYY-MM-DD HH:MM:SS`.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => {
            // Durations and out-of-range serials keep the raw serial number
            match dt.as_datetime() {
                Some(naive) if !dt.is_duration() => naive.format(DATETIME_FORMAT).to_string(),
                _ => dt.to_string(),
            }
        }
        Data::DateTimeIso(s) => s.trim().to_string(),
        Data::DurationIso(s) => s.trim().to_string(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

/// Read the named sheet (or the first sheet) of a workbook.
///
/// Without a sheet name this reads the first sheet in workbook order, not
/// the sheet that was active when the file was saved.
///
/// Fails when the file is missing or the sheet has no data row below the header.
pub fn read_sheet_rows(path: &Path, sheet: Option<&str>) -> Result<SheetRows> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                bail!(
                    "Sheet '{}' not found in {} (available: {})",
                    name,
                    path.display(),
                    sheet_names.join(", ")
                );
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .context("Workbook has no sheets")?
            .clone(),
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    // Ranges start at the first used cell, not necessarily A1
    let header_row_number = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);

    let mut rows = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect::<Vec<_>>());

    let header = rows.next().unwrap_or_default();
    let rows: Vec<Vec<String>> = rows.collect();

    log::debug!(
        "Read sheet '{}' from {}: {} data rows, header at row {}",
        sheet_name,
        path.display(),
        rows.len(),
        header_row_number
    );

    if rows.is_empty() {
        bail!("Sheet must have header row and at least one data row.");
    }

    Ok(SheetRows {
        sheet_name,
        header,
        rows,
        header_row_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::String("  PMEGP ".into())), "PMEGP");
        assert_eq!(cell_to_string(&Data::Int(3)), "3");
        assert_eq!(cell_to_string(&Data::Float(100.0)), "100");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn test_date_cell_as_text() {
        let date = ExcelDateTime::new(45382.0, ExcelDateTimeType::DateTime, false);
        assert_eq!(cell_to_string(&Data::DateTime(date)), "2024-03-31 00:00:00");

        let with_time = ExcelDateTime::new(45382.5, ExcelDateTimeType::DateTime, false);
        assert_eq!(
            cell_to_string(&Data::DateTime(with_time)),
            "2024-03-31 12:00:00"
        );
    }

    #[test]
    fn test_huge_float_not_saturated() {
        assert_eq!(cell_to_string(&Data::Float(1e20)), "100000000000000000000");
        assert_eq!(cell_to_string(&Data::Float(1e300)).len(), 301);
    }

    #[test]
    fn test_missing_file() {
        let err = read_sheet_rows(Path::new("/definitely/not/here.xlsx"), None).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
