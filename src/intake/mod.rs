//! Onboarding intake — record model, summary formatting, duplicate scan.
//!
//! Everything here is pure: records are built per request, formatted, and
//! discarded. Persistence and timestamps belong to the `sheets` adapter.

pub mod dedupe;
pub mod format;
pub mod model;

pub use dedupe::{find_matches, is_duplicate, normalize_name};
pub use format::{duplicate_notice, summary};
pub use model::{OnboardingRecord, StoredRow, SHEET_HEADER};
