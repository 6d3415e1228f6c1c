use chrono::NaiveDateTime;
use serde::Serialize;

/// One logged work session, owned by the document store. Read-only here.
///
/// `duration` is the store's own precomputed value in decimal hours; it is
/// never recomputed from `start`/`end`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration: f64,
}
