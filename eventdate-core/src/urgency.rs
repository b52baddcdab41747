use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::dates::days_between;

/// How soon a resolved event date falls, relative to today.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    AsRefStr,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum EventUrgency {
    /// Today or already past.
    Immediate,
    /// 1 to 7 days out.
    #[strum(serialize = "This Week")]
    #[serde(rename = "This Week")]
    ThisWeek,
    /// 8 to 30 days out.
    #[strum(serialize = "This Month")]
    #[serde(rename = "This Month")]
    ThisMonth,
    /// More than 30 days out.
    Future,
    /// Nothing was resolved.
    #[strum(serialize = "No Date")]
    #[serde(rename = "No Date")]
    NoDate,
}

/// Buckets `date` by its distance in days from `today`.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use eventdate_core::urgency::{classify_urgency, EventUrgency};
/// let today = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// let soon = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
///
/// assert_eq!(classify_urgency(Some(soon), today), EventUrgency::ThisWeek);
/// assert_eq!(classify_urgency(None, today), EventUrgency::NoDate);
/// ```
pub fn classify_urgency(date: Option<NaiveDate>, today: NaiveDate) -> EventUrgency {
    let Some(date) = date else {
        return EventUrgency::NoDate;
    };
    match days_between(today, date) {
        diff if diff <= 0 => EventUrgency::Immediate,
        1..=7 => EventUrgency::ThisWeek,
        8..=30 => EventUrgency::ThisMonth,
        _ => EventUrgency::Future,
    }
}
