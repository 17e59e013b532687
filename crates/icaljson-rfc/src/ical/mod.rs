//! iCalendar support: data model, parser and JSON rendering.

pub mod build;
pub mod core;
pub mod expand;
pub mod parse;

#[cfg(test)]
mod tests;

pub use self::core::{Calendar, Event, Geolocation};
pub use build::{to_json, to_json_bytes};
pub use parse::parse;
