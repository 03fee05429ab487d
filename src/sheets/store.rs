//! Backend-agnostic spreadsheet store trait.

use async_trait::async_trait;

use crate::error::SheetError;
use crate::intake::model::StoredRow;

/// The two operations the intake flow needs from external tabular storage.
///
/// Rows are only ever appended or read in full; nothing updates or deletes.
#[async_trait]
pub trait SheetStore: Send + Sync {
    /// Append one row to the sheet.
    async fn append(&self, row: &StoredRow) -> Result<(), SheetError>;

    /// Fetch a snapshot of every stored row (header excluded).
    async fn fetch_all(&self) -> Result<Vec<StoredRow>, SheetError>;
}
