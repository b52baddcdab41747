//! Plain-text rendering helpers shared by front ends.
//!
//! Summary line: `in two weeks: Friday, 29 Aug 2025 (This Month)`

use chrono::NaiveDate;
use std::fmt::Write;

use crate::dates::format_date_iso;
use crate::parse_input::ParsedDate;

/// Formats a date according to the user's configuration.
/// Falls back to `YYYY-MM-DD` when `date_format` is not a valid chrono format.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(date_format)) {
        Ok(()) => out,
        Err(_) => format_date_iso(date),
    }
}

/// One human-readable line describing a parse result.
pub fn format_summary(parsed: &ParsedDate, date_format: &str) -> String {
    match parsed.date {
        Some(date) => format!(
            "{}: {} ({})",
            parsed.relative_text,
            format_date(date, date_format),
            parsed.urgency
        ),
        None => format!("no date found ({})", parsed.urgency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_input::{ParseOptions, parse_relative_date};

    #[test]
    fn date_formats_readably() {
        let d = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(); // Friday
        let s = format_date(d, "%A, %d %b %Y");
        assert_eq!(s, "Friday, 15 Aug 2025");
    }

    #[test]
    fn invalid_format_falls_back_to_iso() {
        let d = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        assert_eq!(format_date(d, "%Q %"), "2025-08-15");
    }

    #[test]
    fn summary_with_and_without_date() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let parsed = parse_relative_date("in two weeks", Some(ParseOptions::at(today)));
        assert_eq!(
            format_summary(&parsed, "%A, %d %b %Y"),
            "in two weeks: Friday, 29 Aug 2025 (This Month)"
        );

        let parsed = parse_relative_date("hello", Some(ParseOptions::at(today)));
        assert_eq!(format_summary(&parsed, "%Y"), "no date found (No Date)");
    }
}
