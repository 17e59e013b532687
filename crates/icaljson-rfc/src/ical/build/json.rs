//! JSON rendering for a parsed calendar.

use crate::error::RfcResult;
use crate::ical::core::Calendar;

/// ## Summary
/// Renders a calendar as an indented, human-readable JSON string.
///
/// ## Errors
/// Returns an encoding error if serialization fails.
#[tracing::instrument(skip(calendar), fields(events = calendar.events.len()))]
pub fn to_json(calendar: &Calendar) -> RfcResult<String> {
    let json = serde_json::to_string_pretty(calendar)?;
    tracing::trace!(bytes = json.len(), "Rendered calendar");
    Ok(json)
}

/// ## Summary
/// Renders a calendar as indented JSON bytes, ready to be written to disk.
///
/// ## Errors
/// Returns an encoding error if serialization fails.
pub fn to_json_bytes(calendar: &Calendar) -> RfcResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(calendar)?)
}
