//! PostgreSQL literal encoding
//!
//! Backslashes are doubled before single quotes so that an escaped quote is
//! never escaped a second time.

use super::eligibility::EligibilityRules;

/// SQL null
pub const NULL_LITERAL: &str = "null";

/// Empty `text[]`
pub const EMPTY_ARRAY_LITERAL: &str = "'{}'";

/// Escape text for use between single quotes
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "''")
}

/// Quoted string literal, or `null` for blank text. The text is trimmed.
pub fn string_literal(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        NULL_LITERAL.to_string()
    } else {
        quote(trimmed)
    }
}

/// Like [`string_literal`] for an already-optional value
pub fn optional_string_literal(s: Option<&str>) -> String {
    s.map(string_literal)
        .unwrap_or_else(|| NULL_LITERAL.to_string())
}

/// `array['a', 'b']`, or `'{}'` for an empty slice. Elements are kept verbatim.
pub fn string_array_literal<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return EMPTY_ARRAY_LITERAL.to_string();
    }
    let parts: Vec<String> = items.iter().map(|s| quote(s.as_ref())).collect();
    format!("array[{}]", parts.join(", "))
}

/// Eligibility rules as a `jsonb` literal
pub fn jsonb_literal(rules: &EligibilityRules) -> serde_json::Result<String> {
    Ok(format!("{}::jsonb", quote(&rules.to_json()?)))
}

fn quote(s: &str) -> String {
    format!("'{}'", escape(s))
}
