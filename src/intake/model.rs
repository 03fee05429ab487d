//! Onboarding record and its persisted row projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder used when a submission omits the client name.
pub const DEFAULT_NAME: &str = "Unknown Client";
/// Placeholder used when a submission omits the industry.
pub const DEFAULT_INDUSTRY: &str = "Unknown Industry";
/// Placeholder used when a submission omits the goals.
pub const DEFAULT_GOALS: &str = "No goals provided";

/// Header row of the onboarding sheet. Column order is the wire contract
/// with the spreadsheet; `StoredRow::to_cells` must match it.
pub const SHEET_HEADER: [&str; 8] = [
    "Timestamp",
    "Name",
    "Industry",
    "Goals",
    "Priority",
    "Timeline",
    "Budget Range",
    "Main Contact",
];

/// A single client-intake submission.
///
/// Built per incoming request and never mutated. Missing required fields are
/// substituted with placeholders rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    pub name: String,
    pub industry: String,
    pub goals: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_contact: Option<String>,
}

impl OnboardingRecord {
    /// Build a record from optional form fields, applying placeholders for
    /// the required ones.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Option<String>,
        industry: Option<String>,
        goals: Option<String>,
        priority: Option<String>,
        timeline: Option<String>,
        budget_range: Option<String>,
        main_contact: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            industry: industry.unwrap_or_else(|| DEFAULT_INDUSTRY.to_string()),
            goals: goals.unwrap_or_else(|| DEFAULT_GOALS.to_string()),
            priority,
            timeline,
            budget_range,
            main_contact,
        }
    }
}

/// A persisted row: the record projection with a generated timestamp
/// prepended. Absent optionals are stored as empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRow {
    pub timestamp: String,
    pub name: String,
    pub industry: String,
    pub goals: String,
    pub priority: String,
    pub timeline: String,
    pub budget_range: String,
    pub main_contact: String,
}

impl StoredRow {
    /// Project a record into a row, stamping it with `timestamp`.
    pub fn from_record(record: &OnboardingRecord, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: timestamp.to_rfc3339(),
            name: record.name.clone(),
            industry: record.industry.clone(),
            goals: record.goals.clone(),
            priority: record.priority.clone().unwrap_or_default(),
            timeline: record.timeline.clone().unwrap_or_default(),
            budget_range: record.budget_range.clone().unwrap_or_default(),
            main_contact: record.main_contact.clone().unwrap_or_default(),
        }
    }

    /// Cells in sheet column order (see [`SHEET_HEADER`]).
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.name.clone(),
            self.industry.clone(),
            self.goals.clone(),
            self.priority.clone(),
            self.timeline.clone(),
            self.budget_range.clone(),
            self.main_contact.clone(),
        ]
    }

    /// Rebuild a row from sheet cells. Short rows (the API omits trailing
    /// empty cells) are padded with empty strings; extra cells are ignored.
    pub fn from_cells(cells: &[String]) -> Self {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        Self {
            timestamp: cell(0),
            name: cell(1),
            industry: cell(2),
            goals: cell(3),
            priority: cell(4),
            timeline: cell(5),
            budget_range: cell(6),
            main_contact: cell(7),
        }
    }

    /// Whether `cells` looks like the header row rather than data.
    pub fn is_header(cells: &[String]) -> bool {
        cells
            .first()
            .is_some_and(|c| c.eq_ignore_ascii_case(SHEET_HEADER[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn full_record() -> OnboardingRecord {
        OnboardingRecord {
            name: "Acme Corp".to_string(),
            industry: "Manufacturing".to_string(),
            goals: "Automate quoting".to_string(),
            priority: Some("High".to_string()),
            timeline: Some("1-3 months".to_string()),
            budget_range: Some("10k-50k".to_string()),
            main_contact: Some("Jo Vega".to_string()),
        }
    }

    #[test]
    fn new_applies_placeholders() {
        let r = OnboardingRecord::new(None, None, None, None, None, None, None);
        assert_eq!(r.name, DEFAULT_NAME);
        assert_eq!(r.industry, DEFAULT_INDUSTRY);
        assert_eq!(r.goals, DEFAULT_GOALS);
        assert!(r.priority.is_none());
        assert!(r.main_contact.is_none());
    }

    #[test]
    fn new_keeps_provided_fields() {
        let r = OnboardingRecord::new(
            Some("Acme".to_string()),
            None,
            Some("Grow".to_string()),
            Some("Low".to_string()),
            None,
            None,
            None,
        );
        assert_eq!(r.name, "Acme");
        assert_eq!(r.industry, DEFAULT_INDUSTRY);
        assert_eq!(r.goals, "Grow");
        assert_eq!(r.priority.as_deref(), Some("Low"));
    }

    #[test]
    fn row_cells_match_header_order() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let row = StoredRow::from_record(&full_record(), ts);
        let cells = row.to_cells();
        assert_eq!(cells.len(), SHEET_HEADER.len());
        assert_eq!(cells[1], "Acme Corp");
        assert_eq!(cells[6], "10k-50k");
        assert_eq!(cells[7], "Jo Vega");
        assert!(cells[0].starts_with("2024-05-01T12:00:00"));
    }

    #[test]
    fn row_cells_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let row = StoredRow::from_record(&full_record(), ts);
        assert_eq!(StoredRow::from_cells(&row.to_cells()), row);
    }

    #[test]
    fn short_rows_pad_with_empty_cells() {
        let cells = vec!["2024-01-01".to_string(), "Acme".to_string()];
        let row = StoredRow::from_cells(&cells);
        assert_eq!(row.name, "Acme");
        assert_eq!(row.goals, "");
        assert_eq!(row.main_contact, "");
    }

    #[test]
    fn absent_optionals_become_empty_cells() {
        let record = OnboardingRecord::new(Some("Acme".to_string()), None, None, None, None, None, None);
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let row = StoredRow::from_record(&record, ts);
        assert_eq!(row.priority, "");
        assert_eq!(row.timeline, "");
        assert_eq!(row.budget_range, "");
    }

    #[test]
    fn header_row_detection() {
        let header: Vec<String> = SHEET_HEADER.iter().map(|s| s.to_string()).collect();
        assert!(StoredRow::is_header(&header));
        assert!(StoredRow::is_header(&["timestamp".to_string()]));
        assert!(!StoredRow::is_header(&["2024-01-01T00:00:00Z".to_string()]));
        assert!(!StoredRow::is_header(&[]));
    }
}
