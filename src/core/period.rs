//! Billing-period arithmetic: the 20th of one month through the 19th of the
//! next. Pure date math, no side effects.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// A half-month-shifted billing period. Both bounds are inclusive when used
/// as query limits. Invariant: `start` is always day 20, `end` day 19 of the
/// following calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Resolve the billing period starting on the 20th of `month`/`year`.
    ///
    /// `month` 12 rolls the end date into January of `year + 1`. As a caller
    /// convenience, `month` 0 means December of `year - 1`, so that code
    /// passing `report_month - 1` keeps working when the report month is
    /// January. Anything above 12 is rejected.
    pub fn resolve(month: u32, year: i32) -> AppResult<Period> {
        let (month, year) = match month {
            0 => (12, year - 1),
            1..=12 => (month, year),
            _ => return Err(AppError::InvalidMonth(month)),
        };

        let (next_month, next_year) = if month == 12 {
            (1, year + 1)
        } else {
            (month + 1, year)
        };

        let start = NaiveDate::from_ymd_opt(year, month, 20)
            .ok_or(AppError::InvalidMonth(month))?;
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 19)
            .ok_or(AppError::InvalidMonth(next_month))?;

        Ok(Period { start, end })
    }
}
