use chrono::{Datelike, Duration, NaiveDate, Weekday};
use eventdate_core::{EventUrgency, ParseOptions, enrich_event_with_date, parse_relative_date};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 .. roughly 2100
    (0i64..36_500).prop_map(|offset| NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset))
}

proptest! {
    #[test]
    fn never_panics_on_arbitrary_text(text in ".{0,80}", today in any_date()) {
        let parsed = parse_relative_date(&text, Some(ParseOptions::at(today)));
        if parsed.date.is_none() {
            prop_assert_eq!(parsed.relative_text, "");
            prop_assert_eq!(parsed.urgency, EventUrgency::NoDate);
        }
    }

    #[test]
    fn tomorrow_is_one_day_ahead(prefix in "[a-z ]{0,12}", today in any_date()) {
        let text = format!("{prefix} tomorrow");
        let parsed = parse_relative_date(&text, Some(ParseOptions::at(today)));
        prop_assert_eq!(parsed.date, Some(today + Duration::days(1)));
        prop_assert_eq!(parsed.urgency, EventUrgency::ThisWeek);
    }

    #[test]
    fn in_n_days_within_a_week(n in 1i64..=7, today in any_date()) {
        let parsed = parse_relative_date(&format!("in {n} days"), Some(ParseOptions::at(today)));
        prop_assert_eq!(parsed.date, Some(today + Duration::days(n)));
        prop_assert_eq!(parsed.urgency, EventUrgency::ThisWeek);
    }

    #[test]
    fn this_weekend_is_a_future_saturday(today in any_date()) {
        let parsed = parse_relative_date("this weekend", Some(ParseOptions::at(today)));
        let date = parsed.date.unwrap();
        prop_assert_eq!(date.weekday(), Weekday::Sat);
        let ahead = (date - today).num_days();
        prop_assert!((1..=7).contains(&ahead));
    }

    #[test]
    fn next_weekend_follows_this_weekend(today in any_date()) {
        let opts = Some(ParseOptions::at(today));
        let this = parse_relative_date("this weekend", opts).date.unwrap();
        let next = parse_relative_date("next weekend", opts).date.unwrap();
        prop_assert_eq!(next, this + Duration::days(7));
    }

    #[test]
    fn one_week_spellings_agree(today in any_date()) {
        let opts = Some(ParseOptions::at(today));
        let expected = Some(today + Duration::days(7));
        for text in ["in a week", "in one week", "in 1 week", "next week"] {
            prop_assert_eq!(parse_relative_date(text, opts).date, expected);
        }
    }

    #[test]
    fn next_month_stays_in_the_following_month(today in any_date()) {
        let date = parse_relative_date("next month", Some(ParseOptions::at(today))).date.unwrap();
        let months = (date.year() - today.year()) * 12 + date.month() as i32 - today.month() as i32;
        prop_assert_eq!(months, 1);
        prop_assert!(date.day() <= today.day());
    }

    #[test]
    fn enrichment_is_idempotent(text in ".{0,60}", today in any_date()) {
        let opts = Some(ParseOptions::at(today));
        prop_assert_eq!(enrich_event_with_date(&text, opts), enrich_event_with_date(&text, opts));
    }

    #[test]
    fn enriched_date_is_iso(n in 0u32..400, today in any_date()) {
        let info = enrich_event_with_date(&format!("in {n} days"), Some(ParseOptions::at(today)));
        let iso = info.event_date.unwrap();
        prop_assert_eq!(iso.len(), 10);
        prop_assert_eq!(NaiveDate::parse_from_str(&iso, "%Y-%m-%d").unwrap(), today + Duration::days(n as i64));
    }
}

#[test]
fn just_checking_in_has_no_date() {
    let today = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
    let parsed = parse_relative_date("just checking in", Some(ParseOptions::at(today)));
    assert_eq!(parsed.date, None);
    assert_eq!(parsed.relative_text, "");
    assert_eq!(parsed.urgency, EventUrgency::NoDate);
}

#[test]
fn default_options_use_the_local_clock() {
    let today = chrono::Local::now().date_naive();
    let parsed = parse_relative_date("tomorrow", None);
    // The clock may roll over midnight between the two reads.
    let expected = [today + Duration::days(1), today + Duration::days(2)];
    assert!(expected.contains(&parsed.date.unwrap()));
}
