//! iCalendar rendering.
//!
//! The parsed model is rendered as an indented JSON document whose field names
//! follow the [`Calendar`](crate::ical::core::Calendar) and
//! [`Event`](crate::ical::core::Event) serde attributes.

mod json;

pub use json::{to_json, to_json_bytes};
