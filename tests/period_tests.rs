use chrono::{Datelike, NaiveDate};
use timereport::core::period::Period;
use timereport::errors::AppError;

#[test]
fn start_is_day_20_and_end_is_day_19_for_all_months() {
    for year in [1999, 2024, 2025] {
        for month in 1..=12u32 {
            let p = Period::resolve(month, year).unwrap();
            assert_eq!(p.start.day(), 20, "month {}", month);
            assert_eq!(p.end.day(), 19, "month {}", month);
            assert!(p.start < p.end, "month {}", month);

            let expected_end_month = if month == 12 { 1 } else { month + 1 };
            assert_eq!(p.end.month(), expected_end_month);
        }
    }
}

#[test]
fn december_rolls_over_into_next_year() {
    let p = Period::resolve(12, 2024).unwrap();
    assert_eq!(p.start, NaiveDate::from_ymd_opt(2024, 12, 20).unwrap());
    assert_eq!(p.end, NaiveDate::from_ymd_opt(2025, 1, 19).unwrap());
}

#[test]
fn month_zero_means_december_of_previous_year() {
    let p = Period::resolve(0, 2024).unwrap();
    assert_eq!(p, Period::resolve(12, 2023).unwrap());
    assert_eq!(p.start, NaiveDate::from_ymd_opt(2023, 12, 20).unwrap());
    assert_eq!(p.end, NaiveDate::from_ymd_opt(2024, 1, 19).unwrap());
}

#[test]
fn february_period_spans_march_19() {
    let p = Period::resolve(2, 2024).unwrap();
    assert_eq!(p.start, NaiveDate::from_ymd_opt(2024, 2, 20).unwrap());
    assert_eq!(p.end, NaiveDate::from_ymd_opt(2024, 3, 19).unwrap());
}

#[test]
fn months_above_twelve_are_rejected() {
    assert!(matches!(
        Period::resolve(13, 2024),
        Err(AppError::InvalidMonth(13))
    ));
    assert!(matches!(
        Period::resolve(99, 2024),
        Err(AppError::InvalidMonth(99))
    ));
}
