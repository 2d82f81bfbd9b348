//! Turn spreadsheet rows into insert statements
//!
//! Rows that fail validation are skipped and reported; they never abort the
//! import. Only an import with no surviving rows is an error.

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use super::eligibility::{ALL_STATES, build_eligibility_rules};
use super::header::{ColumnMap, SchemeField};
use super::sql::{
    NULL_LITERAL, jsonb_literal, optional_string_literal, string_array_literal, string_literal,
};
use super::values::{LIST_SEPARATOR, split_documents, split_list, trim_or_null};

/// Target columns, in statement order
pub const INSERT_COLUMNS: [&str; 8] = [
    "name",
    "type",
    "eligibility_rules",
    "benefit_summary",
    "states_applicable",
    "key_benefit_display",
    "required_documents",
    "estimated_timeline",
];

/// Name used in diagnostics for rows without one
pub const UNKNOWN_NAME: &str = "unknown";

/// One data row keyed by scheme field. Missing cells read as "".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeRecord {
    values: BTreeMap<SchemeField, String>,
}

impl SchemeRecord {
    /// Build from a raw row using the header's column map
    pub fn from_row<S: AsRef<str>>(row: &[S], columns: &ColumnMap) -> Self {
        let mut record = Self::default();
        for (col, field) in columns.iter() {
            let cell = row.get(col).map(|c| c.as_ref()).unwrap_or("");
            record.set(field, cell);
        }
        record
    }

    /// Trimmed value of a field
    pub fn get(&self, field: SchemeField) -> &str {
        self.values.get(&field).map(|s| s.as_str()).unwrap_or("")
    }

    pub fn set(&mut self, field: SchemeField, value: &str) {
        self.values.insert(field, value.trim().to_string());
    }

    /// True when every mapped cell is empty
    pub fn is_blank(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }
}

/// Allowed values of the `type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeType {
    Loan,
    Subsidy,
    Grant,
}

impl SchemeType {
    /// Case-insensitive parse
    pub fn parse(s: &str) -> Option<SchemeType> {
        match s.trim().to_lowercase().as_str() {
            "loan" => Some(SchemeType::Loan),
            "subsidy" => Some(SchemeType::Subsidy),
            "grant" => Some(SchemeType::Grant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeType::Loan => "loan",
            SchemeType::Subsidy => "subsidy",
            SchemeType::Grant => "grant",
        }
    }
}

/// Why a row was left out of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    MissingName,
    /// Lower-cased value found in the type column
    InvalidType(String),
    EmptyBenefitSummary,
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowError::MissingName => write!(f, "missing Name"),
            RowError::InvalidType(t) => write!(
                f,
                "invalid type '{}', expected loan, subsidy or grant",
                t
            ),
            RowError::EmptyBenefitSummary => write!(f, "empty Benefit Summary"),
        }
    }
}

/// A row that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based spreadsheet row number
    pub row_number: usize,
    /// Scheme name, or `unknown`
    pub name: String,
    pub error: RowError,
}

impl std::fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Skipping row {} ({}): {}",
            self.row_number, self.error, self.name
        )
    }
}

/// Every data row was skipped or blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoValidRows {
    pub skipped: Vec<SkippedRow>,
}

impl std::fmt::Display for NoValidRows {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No valid rows to insert")
    }
}

impl std::error::Error for NoValidRows {}

/// A single `insert` statement with already-encoded literals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    pub table: String,
    /// Literals in [`INSERT_COLUMNS`] order
    pub values: [String; 8],
    pub row_number: usize,
}

impl std::fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "insert into {} ({})\nvalues ({});",
            self.table,
            INSERT_COLUMNS.join(", "),
            self.values.join(", ")
        )
    }
}

/// Outcome of converting one sheet
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub statements: Vec<InsertStatement>,
    pub skipped: Vec<SkippedRow>,
    /// Data rows with no content at all
    pub blank_rows: usize,
}

/// Validate and encode every data row, in order.
///
/// `first_row_number` is the 1-based spreadsheet row number of `rows[0]`.
pub fn emit_statements<S: AsRef<str>>(
    rows: &[Vec<S>],
    columns: &ColumnMap,
    table: &str,
    first_row_number: usize,
) -> Result<ImportReport> {
    let mut report = ImportReport::default();

    for (idx, row) in rows.iter().enumerate() {
        let row_number = first_row_number + idx;
        let record = SchemeRecord::from_row(row, columns);

        if record.is_blank() {
            log::debug!("Row {}: blank, ignoring", row_number);
            report.blank_rows += 1;
            continue;
        }

        match validate(&record) {
            Ok(scheme_type) => {
                let values = encode_values(&record, scheme_type).with_context(|| {
                    format!("Row {}: failed to encode eligibility rules", row_number)
                })?;
                log::debug!("Row {}: emitting '{}'", row_number, record.get(SchemeField::Name));
                report.statements.push(InsertStatement {
                    table: table.to_string(),
                    values,
                    row_number,
                });
            }
            Err(error) => {
                let name = trim_or_null(record.get(SchemeField::Name)).unwrap_or(UNKNOWN_NAME);
                report.skipped.push(SkippedRow {
                    row_number,
                    name: name.to_string(),
                    error,
                });
            }
        }
    }

    if report.statements.is_empty() {
        return Err(NoValidRows {
            skipped: report.skipped,
        }
        .into());
    }

    Ok(report)
}

/// Name, type and benefit summary checks
pub fn validate(record: &SchemeRecord) -> std::result::Result<SchemeType, RowError> {
    if record.get(SchemeField::Name).is_empty() {
        return Err(RowError::MissingName);
    }
    let raw_type = record.get(SchemeField::Type);
    let scheme_type =
        SchemeType::parse(raw_type).ok_or_else(|| RowError::InvalidType(raw_type.to_lowercase()))?;
    if record.get(SchemeField::BenefitSummary).is_empty() {
        return Err(RowError::EmptyBenefitSummary);
    }
    Ok(scheme_type)
}

/// `null` for `*` or blank, otherwise a text array of the listed states.
///
/// The eligibility rules keep `*` as `["*"]`; the two columns have
/// different readers and intentionally differ.
pub fn states_applicable_literal(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw == ALL_STATES {
        return NULL_LITERAL.to_string();
    }
    string_array_literal(&split_list(raw, LIST_SEPARATOR))
}

fn encode_values(
    record: &SchemeRecord,
    scheme_type: SchemeType,
) -> serde_json::Result<[String; 8]> {
    let rules = build_eligibility_rules(record);
    let documents = split_documents(record.get(SchemeField::RequiredDocuments));

    Ok([
        string_literal(record.get(SchemeField::Name)),
        string_literal(scheme_type.as_str()),
        jsonb_literal(&rules)?,
        string_literal(record.get(SchemeField::BenefitSummary)),
        states_applicable_literal(record.get(SchemeField::States)),
        optional_string_literal(trim_or_null(record.get(SchemeField::KeyBenefitDisplay))),
        string_array_literal(&documents),
        optional_string_literal(trim_or_null(record.get(SchemeField::EstimatedTimeline))),
    ])
}

/// Full SQL script: two header comments, then each statement and a blank line
pub fn render_script(report: &ImportReport, source_name: &str, run_hint: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("-- Generated from {}\n", source_name));
    out.push_str(&format!("-- {}\n\n", run_hint));
    for statement in &report.statements {
        out.push_str(&statement.to_string());
        out.push_str("\n\n");
    }
    out
}
