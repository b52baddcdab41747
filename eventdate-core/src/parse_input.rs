use chrono::{Local, NaiveDate};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::dates::{add_days, add_months, days_until_saturday};
use crate::keywords::{Keyword, Keywords, parse_number, whole_word};
use crate::urgency::{EventUrgency, classify_urgency};

/// Configuration options for parsing functions.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions {
    /// The date to use as "today". `None` means the local date at call time.
    pub reference_date: Option<NaiveDate>,
}

impl ParseOptions {
    pub fn at(reference_date: NaiveDate) -> Self {
        Self {
            reference_date: Some(reference_date),
        }
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Result of scanning a piece of text for a relative time expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedDate {
    /// The resolved calendar date, if any rule matched.
    pub date: Option<NaiveDate>,
    /// Canonical form of the matched phrase, empty when nothing matched.
    pub relative_text: String,
    pub urgency: EventUrgency,
}

impl ParsedDate {
    fn none() -> Self {
        Self {
            date: None,
            relative_text: String::new(),
            urgency: EventUrgency::NoDate,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RuleKind {
    Tomorrow,
    NextWeek,
    InDays,
    InWeeks,
    NextMonth,
    InMonths,
    ThisWeekend,
    NextWeekend,
}

struct Rule {
    kind: RuleKind,
    pattern: Regex,
}

/// Rules in priority order. Digits and word boundaries are ASCII only.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    [
        (RuleKind::Tomorrow, "tomorrow"),
        (RuleKind::NextWeek, "(?:next week|in a week)"),
        (
            RuleKind::InDays,
            "in ([0-9]+|a|one|two|three|four|five|six|seven) days?",
        ),
        (
            RuleKind::InWeeks,
            "(?:in )?([0-9]+|a|one|two|three|four|five|six) weeks?",
        ),
        (RuleKind::NextMonth, "(?:next month|in a month)"),
        (
            RuleKind::InMonths,
            "in ([0-9]+|a|one|two|three|four|five|six) months?",
        ),
        (RuleKind::ThisWeekend, "this weekend"),
        (RuleKind::NextWeekend, "next weekend"),
    ]
    .into_iter()
    .map(|(kind, pattern)| Rule {
        kind,
        pattern: Regex::new(&whole_word(pattern)).expect("rule patterns are valid"),
    })
    .collect()
});

/// Scans free text for a relative time expression and resolves it to a date.
///
/// Rules are tried in a fixed priority order and the first one that matches
/// anywhere in the text wins:
/// 1.  `tomorrow`
/// 2.  `next week` / `in a week`
/// 3.  `in N day(s)`
/// 4.  `[in] N week(s)`
/// 5.  `next month` / `in a month` (calendar months)
/// 6.  `in N month(s)`
/// 7.  `this weekend` (next Saturday strictly after today)
/// 8.  `next weekend` (the Saturday after that)
///
/// `N` is a digit string or one of `a, one .. seven` (days) / `a, one .. six`
/// (weeks and months). Matching is case-insensitive and never fails: text with
/// no recognizable phrase yields `date: None`, an empty `relative_text` and
/// [`EventUrgency::NoDate`].
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use eventdate_core::parse_input::{parse_relative_date, ParseOptions};
/// # use eventdate_core::urgency::EventUrgency;
/// let today = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
///
/// let parsed = parse_relative_date("Her birthday is in two weeks!", Some(ParseOptions::at(today)));
///
/// assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2025, 8, 29));
/// assert_eq!(parsed.relative_text, "in two weeks");
/// assert_eq!(parsed.urgency, EventUrgency::ThisMonth);
/// ```
pub fn parse_relative_date(text: &str, options: Option<ParseOptions>) -> ParsedDate {
    let today = options.unwrap_or_default().today();
    let lower = Keywords::normalize(&text.to_lowercase());

    let Some((rule, caps)) = RULES
        .iter()
        .find_map(|rule| rule.pattern.captures(&lower).map(|caps| (rule, caps)))
    else {
        return ParsedDate::none();
    };

    match resolve(rule.kind, &caps, today) {
        Some((date, relative_text)) => {
            debug!("{:?} matched '{}' -> {}", rule.kind, &caps[0], date);
            ParsedDate {
                date: Some(date),
                relative_text,
                urgency: classify_urgency(Some(date), today),
            }
        }
        None => {
            debug!("{:?} matched '{}' but the date is out of range", rule.kind, &caps[0]);
            ParsedDate::none()
        }
    }
}

/// Computes the date and canonical phrase for a matched rule.
fn resolve(kind: RuleKind, caps: &Captures, today: NaiveDate) -> Option<(NaiveDate, String)> {
    let fixed = |date: Option<NaiveDate>, keyword: Keyword| {
        date.map(|d| (d, keyword.as_ref().to_string()))
    };
    let counted = |unit: &str| {
        let token = caps.get(1).map_or("", |m| m.as_str());
        let n = parse_number(token);
        (n, plural_phrase(token, n, unit))
    };

    match kind {
        RuleKind::Tomorrow => fixed(add_days(today, 1), Keyword::Tomorrow),
        RuleKind::NextWeek => fixed(add_days(today, 7), Keyword::NextWeek),
        RuleKind::InDays => {
            let (n, text) = counted("day");
            add_days(today, n).map(|d| (d, text))
        }
        RuleKind::InWeeks => {
            let (n, text) = counted("week");
            n.checked_mul(7)
                .and_then(|days| add_days(today, days))
                .map(|d| (d, text))
        }
        RuleKind::NextMonth => fixed(add_months(today, 1), Keyword::NextMonth),
        RuleKind::InMonths => {
            let (n, text) = counted("month");
            u32::try_from(n)
                .ok()
                .and_then(|months| add_months(today, months))
                .map(|d| (d, text))
        }
        RuleKind::ThisWeekend => fixed(
            add_days(today, days_until_saturday(today)),
            Keyword::ThisWeekend,
        ),
        RuleKind::NextWeekend => fixed(
            add_days(today, days_until_saturday(today) + 7),
            Keyword::NextWeekend,
        ),
    }
}

/// `in two weeks`, `in a day`, `in 1 month`. The numeral is kept as written.
fn plural_phrase(token: &str, n: u64, unit: &str) -> String {
    let suffix = if n > 1 { "s" } else { "" };
    format!("in {token} {unit}{suffix}")
}
