//! Temporal enrichment for captured customer events.
//!
//! A description such as `"her anniversary is next month"` becomes the three
//! fields downstream storage keeps next to the event: the matched phrase, the
//! ISO date and the urgency bucket.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dates::format_date_iso;
use crate::parse_input::{ParseOptions, parse_relative_date};
use crate::urgency::EventUrgency;

/// Temporal fields extracted from an event description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_time_text: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    pub urgency: EventUrgency,
}

/// Extracts the temporal fields of an event from its free-text description.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use eventdate_core::event::enrich_event_with_date;
/// # use eventdate_core::parse_input::ParseOptions;
/// # use eventdate_core::urgency::EventUrgency;
/// let today = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// let info = enrich_event_with_date("wedding is tomorrow", Some(ParseOptions::at(today)));
///
/// assert_eq!(info.relative_time_text.as_deref(), Some("tomorrow"));
/// assert_eq!(info.event_date.as_deref(), Some("2025-08-16"));
/// assert_eq!(info.urgency, EventUrgency::ThisWeek);
/// ```
pub fn enrich_event_with_date(description: &str, options: Option<ParseOptions>) -> EventDateInfo {
    let parsed = parse_relative_date(description, options);
    EventDateInfo {
        relative_time_text: Some(parsed.relative_text).filter(|text| !text.is_empty()),
        event_date: parsed.date.map(format_date_iso),
        urgency: parsed.urgency,
    }
}

/// A customer milestone (birthday, anniversary, ...) mentioned in conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeaningfulEvent {
    pub event_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_time_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    pub urgency: EventUrgency,
    /// Local timestamp of the conversation turn, `YYYY-MM-DDTHH:MM:SS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_note: Option<String>,
    /// Free-form JSON kept alongside the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl MeaningfulEvent {
    /// Builds an event and fills its temporal fields from `description`.
    pub fn new(
        event_type: impl Into<String>,
        description: impl Into<String>,
        options: Option<ParseOptions>,
    ) -> Self {
        let description = description.into();
        let info = enrich_event_with_date(&description, options);
        Self {
            event_type: event_type.into(),
            description,
            relative_time_text: info.relative_time_text,
            event_date: info.event_date,
            urgency: info.urgency,
            captured_at: None,
            agent_note: None,
            metadata: None,
        }
    }

    pub fn captured_at(mut self, at: NaiveDateTime) -> Self {
        self.captured_at = Some(at.format("%Y-%m-%dT%H:%M:%S").to_string());
        self
    }

    /// Blank notes are dropped.
    pub fn agent_note(mut self, note: impl Into<String>) -> Self {
        self.agent_note = Some(note.into()).filter(|n| !n.trim().is_empty());
        self
    }

    pub fn metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata).filter(|m| !m.is_null());
        self
    }
}
