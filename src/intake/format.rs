//! Onboarding summary rendering.
//!
//! Pure string assembly: the same record always renders to the same bytes.
//! Advisory lines are chosen from fixed lookup tables keyed on the exact
//! field value; anything unrecognized simply emits nothing.

use super::model::OnboardingRecord;

/// Advisory per known priority value.
const PRIORITY_ADVISORIES: &[(&str, &str)] = &[
    (
        "High",
        "Note: High priority client. Schedule the kickoff meeting within 48 hours.",
    ),
    (
        "Medium",
        "Note: Medium priority. Target a kickoff meeting within two weeks.",
    ),
    (
        "Low",
        "Note: Low priority. Add to the nurture list and follow up monthly.",
    ),
];

/// Advisory per known timeline value.
const TIMELINE_ADVISORIES: &[(&str, &str)] = &[
    (
        "1-3 months",
        "Timeline note: Aggressive timeline. Scope a minimal first deliverable.",
    ),
    (
        "3-6 months",
        "Timeline note: Standard timeline. Plan a phased delivery.",
    ),
    (
        ">6 months",
        "Timeline note: Long runway. Schedule quarterly check-ins.",
    ),
];

/// Advisory per known budget range.
const BUDGET_ADVISORIES: &[(&str, &str)] = &[
    (
        "<10k",
        "Budget note: Small budget. Recommend a fixed-scope starter package.",
    ),
    (
        "10k-50k",
        "Budget note: Mid-range budget. Recommend a standard engagement.",
    ),
    (
        ">50k",
        "Budget note: Large budget. Assign a senior lead for custom scoping.",
    ),
];

/// Look up the advisory for `value` in a dimension table.
fn advisory(table: &[(&str, &'static str)], value: Option<&str>) -> Option<&'static str> {
    let value = value?;
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, line)| *line)
}

/// Render the onboarding summary for a record.
///
/// Layout: identity lines, optional engagement lines, the three fixed next
/// steps, then at most one advisory line per dimension.
pub fn summary(record: &OnboardingRecord) -> String {
    let mut lines = vec![
        format!("Client Name: {}", record.name),
        format!("Industry: {}", record.industry),
    ];

    if let Some(ref contact) = record.main_contact {
        lines.push(format!("Main Contact: {contact}"));
    }

    lines.push(format!("Goals: {}", record.goals));

    let engagement: Vec<String> = [
        record.priority.as_deref().map(|p| format!("Priority: {p}")),
        record.timeline.as_deref().map(|t| format!("Timeline: {t}")),
        record
            .budget_range
            .as_deref()
            .map(|b| format!("Budget Range: {b}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !engagement.is_empty() {
        lines.push(String::new());
        lines.extend(engagement);
    }

    lines.push(String::new());
    lines.push("Recommended Next Steps:".to_string());
    lines.push("1. Kickoff meeting".to_string());
    lines.push("2. Requirement gathering".to_string());
    lines.push("3. Model selection and scoping".to_string());

    for (table, value) in [
        (PRIORITY_ADVISORIES, record.priority.as_deref()),
        (TIMELINE_ADVISORIES, record.timeline.as_deref()),
        (BUDGET_ADVISORIES, record.budget_range.as_deref()),
    ] {
        if let Some(line) = advisory(table, value) {
            lines.push(line.to_string());
        }
    }

    lines.join("\n")
}

/// Response text for a submission rejected by the duplicate scan.
pub fn duplicate_notice(name: &str) -> String {
    format!(
        "A client named \"{name}\" already exists in the onboarding sheet. \
         No new record was created."
    )
}
