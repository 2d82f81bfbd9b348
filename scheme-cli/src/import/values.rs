//! Cell text normalization: list splitting, number parsing, trimming

use serde::Serialize;

/// Separator for list-valued cells (business types, industries, states, ...)
pub const LIST_SEPARATOR: char = ',';

/// Separator for required documents
pub const DOCUMENT_SEPARATOR: char = ';';

/// A parsed numeric cell. Integers stay integers in the JSON output.
///
/// `i128` keeps the exact digits of amounts too large for `i64`; only
/// integers past `i128` fall back to a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumericValue {
    Int(i128),
    Float(f64),
}

impl NumericValue {
    /// Truncate towards zero, saturating at the `i128` bounds
    pub fn truncate(self) -> i128 {
        match self {
            NumericValue::Int(i) => i,
            NumericValue::Float(f) => f.trunc() as i128,
        }
    }
}

/// Split on `sep`, trimming items and dropping empty ones
pub fn split_list(s: &str, sep: char) -> Vec<String> {
    s.split(sep)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Required documents are semicolon-separated
pub fn split_documents(s: &str) -> Vec<String> {
    split_list(s, DOCUMENT_SEPARATOR)
}

/// Parse a number, integer first, then decimal.
///
/// Thousands separators are stripped before parsing. Blank or unparseable
/// input yields `None`, as do non-finite values.
pub fn parse_number(s: &str) -> Option<NumericValue> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }

    if let Ok(i) = cleaned.parse::<i128>() {
        return Some(NumericValue::Int(i));
    }

    match cleaned.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(NumericValue::Float(f)),
        _ => None,
    }
}

/// Trimmed text, or `None` when nothing is left
pub fn trim_or_null(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
