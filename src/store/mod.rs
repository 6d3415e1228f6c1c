//! Document-store seam. The core talks to this trait; the Notion client in
//! `notion` is the production implementation, tests plug in a fake.

pub mod notion;

use crate::core::period::Period;
use crate::errors::AppResult;
use crate::models::{SummaryDocument, SummaryKey, TimeEntry};

pub use notion::NotionStore;

/// Reference to an existing document in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub id: String,
}

/// A freshly created document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedDocument {
    pub id: String,
    pub url: String,
}

pub trait DocumentStore {
    /// All live (non-archived) summary pages matching the key.
    fn query_summaries(&self, key: &SummaryKey) -> AppResult<Vec<DocumentRef>>;

    /// Soft-delete a document. Idempotent on the store side.
    fn archive_document(&self, id: &str) -> AppResult<()>;

    /// All of `company`'s time entries with a date inside `period`, both
    /// bounds inclusive, ascending by date.
    fn query_entries(&self, company: &str, period: &Period) -> AppResult<Vec<TimeEntry>>;

    /// Create a new summary page and return its id and access URL.
    fn create_summary(&self, doc: &SummaryDocument) -> AppResult<CreatedDocument>;
}
