//! Summary regeneration: archive the previous page for a key, re-query the
//! billing period's entries and create a fresh summary page.

use crate::config::Config;
use crate::core::period::Period;
use crate::errors::{AppError, AppResult};
use crate::models::{Outcome, SummaryDocument, SummaryKey, SummaryRow, TimeEntry};
use crate::store::DocumentStore;
use crate::utils::format;

/// Regenerate the summary page for one (company, month, year) triple.
///
/// Any pre-existing page for the key is archived up front, before the entries
/// query. This holds the at-most-one-live-page invariant on every invocation,
/// including runs that end in `NoEntries`. Note the consequence: a period
/// with zero logged hours is left without any summary page, even if a stale
/// one existed before.
pub fn regenerate(
    store: &dyn DocumentStore,
    cfg: &Config,
    company: &str,
    month: u32,
    year: i32,
) -> AppResult<Outcome> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(month));
    }

    let label = cfg.month_label(month)?.to_string();
    let key = SummaryKey {
        company: company.to_string(),
        month_label: label.clone(),
        year,
    };

    for page in store.query_summaries(&key)? {
        store.archive_document(&page.id)?;
    }

    // The resolver takes the *start* month; the report month is the one the
    // period ends in.
    let period = Period::resolve(month - 1, year)?;
    let entries = store.query_entries(company, &period)?;

    if entries.is_empty() {
        println!("No hours logged for {} in {} {}", company, label, year);
        return Ok(Outcome::NoEntries);
    }

    let doc = build_document(cfg, key, &entries);
    let created = store.create_summary(&doc)?;

    Ok(Outcome::Created(created.url))
}

/// Build the summary page from the queried entries. Row order follows the
/// entry order; the total is the exact sum of the entry-supplied durations.
pub fn build_document(cfg: &Config, key: SummaryKey, entries: &[TimeEntry]) -> SummaryDocument {
    let mut total_hours = 0.0;
    let mut rows = Vec::with_capacity(entries.len());

    for entry in entries {
        total_hours += entry.duration;
        rows.push(SummaryRow {
            date: format::format_date(&entry.start),
            start_time: format::format_time(&entry.start),
            end_time: format::format_time(&entry.end),
            duration: format::format_hours(entry.duration),
        });
    }

    SummaryDocument {
        title: format!("{} - {} - {}", cfg.reporter_name, key.company, key.month_label),
        key,
        total_hours,
        rows,
    }
}
