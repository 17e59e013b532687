//! iCalendar data model (RFC 5545 §3.4, §3.6.1).
//!
//! The model is built once by the parser and rendered once as JSON. Field
//! order here is the field order of the rendered document; unset and empty
//! fields are omitted from it.

mod calendar;
mod content_line;
mod event;

pub use calendar::Calendar;
pub use content_line::ContentLine;
pub use event::{Event, Geolocation};

#[expect(
    clippy::ref_option,
    reason = "serde passes skip_serializing_if predicates a reference to the field"
)]
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
