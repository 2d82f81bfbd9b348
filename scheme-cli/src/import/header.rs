//! Header row parsing: maps spreadsheet column labels to scheme fields

use std::collections::BTreeMap;

/// Canonical scheme fields recognised in the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemeField {
    Name,
    Type,
    BenefitSummary,
    KeyBenefitDisplay,
    States,
    RequiredDocuments,
    EstimatedTimeline,
    BusinessTypes,
    Industries,
    TurnoverMax,
    TurnoverMin,
    CompanyAgeMax,
    CompanyAgeMin,
    FundingTypes,
}

impl SchemeField {
    /// All fields, in template column order
    pub const ALL: [SchemeField; 14] = [
        SchemeField::Name,
        SchemeField::Type,
        SchemeField::BenefitSummary,
        SchemeField::KeyBenefitDisplay,
        SchemeField::States,
        SchemeField::RequiredDocuments,
        SchemeField::EstimatedTimeline,
        SchemeField::BusinessTypes,
        SchemeField::Industries,
        SchemeField::TurnoverMax,
        SchemeField::TurnoverMin,
        SchemeField::CompanyAgeMax,
        SchemeField::CompanyAgeMin,
        SchemeField::FundingTypes,
    ];

    /// Fields that must be present in the header for an import to run
    pub const REQUIRED: [SchemeField; 3] = [
        SchemeField::Name,
        SchemeField::Type,
        SchemeField::BenefitSummary,
    ];

    /// Display label, as written in the template header
    pub fn label(&self) -> &'static str {
        match self {
            SchemeField::Name => "Name",
            SchemeField::Type => "Type",
            SchemeField::BenefitSummary => "Benefit Summary",
            SchemeField::KeyBenefitDisplay => "Key Benefit Display",
            SchemeField::States => "States",
            SchemeField::RequiredDocuments => "Required Documents",
            SchemeField::EstimatedTimeline => "Estimated Timeline",
            SchemeField::BusinessTypes => "Business Types",
            SchemeField::Industries => "Industries",
            SchemeField::TurnoverMax => "Turnover Max",
            SchemeField::TurnoverMin => "Turnover Min",
            SchemeField::CompanyAgeMax => "Company Age Max",
            SchemeField::CompanyAgeMin => "Company Age Min",
            SchemeField::FundingTypes => "Funding Types",
        }
    }

    /// Canonical field key
    pub fn key(&self) -> &'static str {
        match self {
            SchemeField::Name => "name",
            SchemeField::Type => "type",
            SchemeField::BenefitSummary => "benefit_summary",
            SchemeField::KeyBenefitDisplay => "key_benefit_display",
            SchemeField::States => "states",
            SchemeField::RequiredDocuments => "required_documents",
            SchemeField::EstimatedTimeline => "estimated_timeline",
            SchemeField::BusinessTypes => "business_types",
            SchemeField::Industries => "industries",
            SchemeField::TurnoverMax => "turnover_max",
            SchemeField::TurnoverMin => "turnover_min",
            SchemeField::CompanyAgeMax => "company_age_max",
            SchemeField::CompanyAgeMin => "company_age_min",
            SchemeField::FundingTypes => "funding_types",
        }
    }

    /// Match a header cell against the known labels (case-insensitive, trimmed)
    pub fn from_label(label: &str) -> Option<SchemeField> {
        let normalized = label.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.label().to_lowercase() == normalized)
    }
}

impl std::fmt::Display for SchemeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Column position -> scheme field, built once from the header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: BTreeMap<usize, SchemeField>,
}

impl ColumnMap {
    /// Field mapped at a column position, if any
    pub fn field_at(&self, col: usize) -> Option<SchemeField> {
        self.columns.get(&col).copied()
    }

    /// Whether any column maps to the given field
    pub fn contains(&self, field: SchemeField) -> bool {
        self.columns.values().any(|f| *f == field)
    }

    /// Required fields missing from the header
    pub fn missing_required(&self) -> Vec<SchemeField> {
        SchemeField::REQUIRED
            .iter()
            .copied()
            .filter(|f| !self.contains(*f))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate (column, field) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, SchemeField)> + '_ {
        self.columns.iter().map(|(col, field)| (*col, *field))
    }
}

/// Build a ColumnMap from the header row. Unknown labels are ignored.
///
/// When a label appears twice, the rightmost column wins, matching how the
/// row values are later assigned.
pub fn parse_header<S: AsRef<str>>(header: &[S]) -> ColumnMap {
    let mut columns = BTreeMap::new();
    let mut seen: BTreeMap<SchemeField, usize> = BTreeMap::new();

    for (col, cell) in header.iter().enumerate() {
        let Some(field) = SchemeField::from_label(cell.as_ref()) else {
            continue;
        };
        if let Some(prev) = seen.insert(field, col) {
            log::warn!(
                "Header '{}' appears more than once (columns {} and {}); using column {}",
                field.label(),
                prev + 1,
                col + 1,
                col + 1
            );
            columns.remove(&prev);
        }
        log::debug!("Column {} -> {}", col + 1, field.key());
        columns.insert(col, field);
    }

    ColumnMap { columns }
}
