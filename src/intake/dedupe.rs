//! Duplicate detection and name search over stored rows.
//!
//! Both scans are linear; volumes are small (manual onboarding, not bulk
//! ingestion). The fail-open policy on a failed row fetch lives at the call
//! site in the route handlers, not here.

use super::model::StoredRow;

/// Canonical form used for name comparison: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether any existing row holds the same name as `candidate`, ignoring
/// case and surrounding whitespace.
pub fn is_duplicate(candidate: &str, rows: &[StoredRow]) -> bool {
    let candidate = normalize_name(candidate);
    rows.iter().any(|row| normalize_name(&row.name) == candidate)
}

/// All rows whose name contains `query`, case-insensitively.
pub fn find_matches<'a>(query: &str, rows: &'a [StoredRow]) -> Vec<&'a StoredRow> {
    let query = query.trim().to_lowercase();
    rows.iter()
        .filter(|row| row.name.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> StoredRow {
        StoredRow {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            name: name.to_string(),
            industry: String::new(),
            goals: String::new(),
            priority: String::new(),
            timeline: String::new(),
            budget_range: String::new(),
            main_contact: String::new(),
        }
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_name("  Acme Corp "), "acme corp");
        assert_eq!(normalize_name("ACME"), "acme");
    }

    #[test]
    fn duplicate_ignores_case_and_whitespace() {
        let rows = vec![row(" acme corp ")];
        assert!(is_duplicate("Acme Corp", &rows));
        assert!(is_duplicate("ACME CORP", &rows));
        assert!(is_duplicate("  acme corp", &rows));
    }

    #[test]
    fn duplicate_requires_exact_match_after_normalization() {
        let rows = vec![row("Acme Corp")];
        assert!(!is_duplicate("Acme", &rows));
        assert!(!is_duplicate("Acme Corporation", &rows));
    }

    #[test]
    fn no_rows_means_no_duplicate() {
        assert!(!is_duplicate("Acme", &[]));
    }

    #[test]
    fn matches_are_substring_and_case_insensitive() {
        let rows = vec![row("Acme Corp"), row("Peak Medical"), row("acme labs")];
        let hits = find_matches("ACME", &rows);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Acme Corp");
        assert_eq!(hits[1].name, "acme labs");
    }

    #[test]
    fn no_matches_returns_empty() {
        let rows = vec![row("Acme Corp")];
        assert!(find_matches("zenith", &rows).is_empty());
    }
}
