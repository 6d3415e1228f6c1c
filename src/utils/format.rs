//! Text formatting for report cells: DD.MM.YYYY dates, HH:MM times and
//! decimal hour values.

use chrono::NaiveDateTime;

pub fn format_date(ts: &NaiveDateTime) -> String {
    ts.format("%d.%m.%Y").to_string()
}

pub fn format_time(ts: &NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

/// Render hours with their natural decimal precision: `4` stays `4`,
/// `3.5` stays `3.5`. No rounding.
pub fn format_hours(hours: f64) -> String {
    format!("{}", hours)
}
