//! iCalendar (RFC 5545) to JSON conversion.
//!
//! The [`ical::parse`] module turns calendar text into the typed model in
//! [`ical::core`]; [`ical::build`] renders that model as JSON.

pub mod error;
pub mod ical;
