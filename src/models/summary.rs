//! Summary page model: the typed shape the core works with.
//! Translation to the store's wire format happens in the store layer only.

use serde::Serialize;

/// Column headers of the generated entry table.
pub const TABLE_HEADERS: [&str; 4] = ["Datum", "Start", "Ende", "Dauer"];

/// Identity key of a summary page. At most one non-archived page may exist
/// per key after a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummaryKey {
    pub company: String,
    pub month_label: String,
    pub year: i32,
}

/// One table row of the summary, already formatted as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
}

/// A fully built summary page, ready to be created in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryDocument {
    pub title: String,
    pub key: SummaryKey,
    pub total_hours: f64,
    pub rows: Vec<SummaryRow>,
}

impl SummaryDocument {
    /// Total line rendered below the table, e.g. "Insgesamt: 7.5h".
    pub fn total_line(&self) -> String {
        format!("Insgesamt: {}h", self.total_hours)
    }
}

/// Result of one regeneration run for a (company, month, year) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new summary page was created; carries its access URL.
    Created(String),
    /// No hours were logged in the period; nothing was created.
    NoEntries,
}
