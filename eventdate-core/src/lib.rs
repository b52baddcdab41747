pub mod config;
pub mod dates;
pub mod event;
pub mod keywords;
pub mod parse_input;
pub mod render;
pub mod urgency;

pub use config::Config;
pub use event::{EventDateInfo, MeaningfulEvent, enrich_event_with_date};
pub use parse_input::{ParseOptions, ParsedDate, parse_relative_date};
pub use urgency::EventUrgency;
