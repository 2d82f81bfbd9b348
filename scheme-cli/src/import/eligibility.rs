//! Eligibility rules built from a scheme row
//!
//! Keys are only present when the source cell is non-empty and parses;
//! an absent key means "no constraint".

use serde::Serialize;

use super::emit::SchemeRecord;
use super::header::SchemeField;
use super::values::{LIST_SEPARATOR, NumericValue, parse_number, split_list};

/// Value of the `states` cell meaning "applies to all states"
pub const ALL_STATES: &str = "*";

/// Structured eligibility criteria, serialized into the `eligibility_rules` column
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EligibilityRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnover_max: Option<NumericValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnover_min: Option<NumericValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_age_max_years: Option<i128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_age_min_years: Option<i128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_types: Option<Vec<String>>,
}

impl EligibilityRules {
    /// Compact JSON text
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Build the eligibility rules for a record
pub fn build_eligibility_rules(record: &SchemeRecord) -> EligibilityRules {
    EligibilityRules {
        business_types: lowercase_list(record.get(SchemeField::BusinessTypes)),
        industries: non_empty(split_list(
            record.get(SchemeField::Industries),
            LIST_SEPARATOR,
        )),
        states: states_rule(record.get(SchemeField::States)),
        turnover_max: parse_number(record.get(SchemeField::TurnoverMax)),
        turnover_min: parse_number(record.get(SchemeField::TurnoverMin)),
        company_age_max_years: parse_number(record.get(SchemeField::CompanyAgeMax))
            .map(NumericValue::truncate),
        company_age_min_years: parse_number(record.get(SchemeField::CompanyAgeMin))
            .map(NumericValue::truncate),
        funding_types: lowercase_list(record.get(SchemeField::FundingTypes)),
    }
}

/// `*` keeps the wildcard as a one-element list, blank omits the key
fn states_rule(raw: &str) -> Option<Vec<String>> {
    let raw = raw.trim();
    if raw == ALL_STATES {
        Some(vec![ALL_STATES.to_string()])
    } else {
        non_empty(split_list(raw, LIST_SEPARATOR))
    }
}

fn lowercase_list(raw: &str) -> Option<Vec<String>> {
    non_empty(
        split_list(raw, LIST_SEPARATOR)
            .into_iter()
            .map(|s| s.to_lowercase())
            .collect(),
    )
}

fn non_empty(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() { None } else { Some(items) }
}
