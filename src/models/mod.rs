pub mod entry;
pub mod summary;

pub use entry::TimeEntry;
pub use summary::{Outcome, SummaryDocument, SummaryKey, SummaryRow};
