use chrono::{Datelike, Days, Months, NaiveDate};

/// Formats a date as `YYYY-MM-DD` for storage.
///
/// Dates are naive local calendar days, so there is no timezone conversion
/// and the output never drifts by a day.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use eventdate_core::dates::format_date_iso;
/// let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
/// assert_eq!(format_date_iso(date), "2025-03-07");
/// ```
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Days from `date` to the next Saturday strictly after it (1..=7).
/// A Saturday maps to 7, never 0.
pub fn days_until_saturday(date: NaiveDate) -> u64 {
    let day_of_week = date.weekday().num_days_from_sunday() as u64;
    match (6 + 7 - day_of_week) % 7 {
        0 => 7,
        n => n,
    }
}

/// `date` plus `days`, or `None` past the representable range.
pub fn add_days(date: NaiveDate, days: u64) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(days))
}

/// Calendar month addition, clamped to the last day of the target month
/// (Jan 31 + 1 month is Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_is_zero_padded() {
        assert_eq!(format_date_iso(ymd(2025, 1, 2)), "2025-01-02");
        assert_eq!(format_date_iso(ymd(2025, 12, 31)), "2025-12-31");
    }

    #[test]
    fn saturday_offsets_across_the_week() {
        // 2025-08-17 is a Sunday
        let expected = [6, 5, 4, 3, 2, 1, 7];
        for (i, want) in expected.iter().enumerate() {
            let day = ymd(2025, 8, 17 + i as u32);
            assert_eq!(days_until_saturday(day), *want, "offset from {day}");
        }
    }

    #[test]
    fn months_clamp_to_month_end() {
        assert_eq!(add_months(ymd(2025, 1, 31), 1), Some(ymd(2025, 2, 28)));
        assert_eq!(add_months(ymd(2024, 1, 31), 1), Some(ymd(2024, 2, 29)));
        assert_eq!(add_months(ymd(2025, 8, 31), 3), Some(ymd(2025, 11, 30)));
        assert_eq!(add_months(ymd(2025, 11, 15), 2), Some(ymd(2026, 1, 15)));
    }

    #[test]
    fn overflow_is_none() {
        assert_eq!(add_days(NaiveDate::MAX, 1), None);
        assert_eq!(add_months(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(ymd(2025, 8, 15), ymd(2025, 8, 20)), 5);
        assert_eq!(days_between(ymd(2025, 8, 20), ymd(2025, 8, 15)), -5);
        assert_eq!(days_between(ymd(2025, 8, 15), ymd(2025, 8, 15)), 0);
    }
}
