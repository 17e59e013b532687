//! Timezone resolution and UTC conversion for zone-qualified date-times.
//!
//! `TZID` values in the wild are mostly IANA names, but Outlook exports use
//! Windows zone names and some clients prepend a vendor path. ICU4X maps both
//! onto canonical IANA names before `chrono-tz` is consulted.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

/// Vendor path prefixes stripped from `TZID` values.
const VENDOR_PREFIXES: &[&str] = &["/mozilla.org/", "/softwarestudio.org/"];

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    /// The wall-clock time falls into a DST gap even after the one hour shift.
    #[error("{0} does not exist in its timezone")]
    NonExistentTime(String),
}

/// Maps `TZID` values to zones, remembering every outcome.
///
/// One resolver lives for the duration of a parse, so an unknown `TZID` is
/// reported once per file however many properties carry it.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    cache: HashMap<String, Option<Tz>>,
}

impl TimeZoneResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Resolves a `TZID` value to a zone.
    ///
    /// ## Errors
    /// Returns `UnknownTimezone` when neither the canonical form nor the
    /// value as given names a zone.
    pub fn resolve(&mut self, tzid: &str) -> Result<Tz, ConversionError> {
        let resolved = match self.cache.get(tzid) {
            Some(cached) => *cached,
            None => {
                let resolved = lookup_zone(tzid);
                if resolved.is_none() {
                    tracing::warn!(tzid, "Unknown timezone, keeping floating times");
                }
                self.cache.insert(tzid.to_string(), resolved);
                resolved
            }
        };

        resolved.ok_or_else(|| ConversionError::UnknownTimezone(tzid.to_string()))
    }
}

fn lookup_zone(tzid: &str) -> Option<Tz> {
    let canonical = canonical_tzid(tzid);
    let zone = Tz::from_str(&canonical).or_else(|_e| Tz::from_str(tzid)).ok();
    if let Some(zone) = zone {
        tracing::trace!(tzid, %zone, "Resolved timezone");
    }
    zone
}

/// Returns the canonical IANA name for a `TZID`, or the value with any
/// vendor prefix removed when ICU does not know it.
fn canonical_tzid(tzid: &str) -> String {
    let name = VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| tzid.strip_prefix(prefix))
        .unwrap_or(tzid);

    let iana = IanaParserExtended::new();

    if let Some(zone) = WindowsParser::new().parse(name, None)
        && let Some(entry) = iana.iter().find(|entry| entry.time_zone == zone)
    {
        return entry.canonical.to_string();
    }

    // Also folds renamed zones such as Europe/Kiev into Europe/Kyiv
    let parsed = iana.parse(name);
    if parsed.time_zone == icu::time::TimeZone::UNKNOWN {
        name.to_string()
    } else {
        parsed.canonical.to_string()
    }
}

/// ## Summary
/// Interprets a wall-clock time in the zone named by `tzid` and returns the
/// matching UTC instant.
///
/// A time that occurs twice (DST fold) maps to the earlier instant. A time
/// skipped by a DST gap is moved one hour forward.
///
/// ## Errors
/// Returns `UnknownTimezone` if `tzid` cannot be resolved and
/// `NonExistentTime` if the shifted time still does not exist.
pub fn convert_to_utc(
    local: NaiveDateTime,
    tzid: &str,
    resolver: &mut TimeZoneResolver,
) -> Result<DateTime<Utc>, ConversionError> {
    let zone = resolver.resolve(tzid)?;

    let instant = match zone.from_local_datetime(&local) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => Some(instant),
        LocalResult::None => zone.from_local_datetime(&(local + Duration::hours(1))).earliest(),
    };

    instant
        .map(|instant| instant.with_timezone(&Utc))
        .ok_or_else(|| ConversionError::NonExistentTime(format!("{local} in {tzid}")))
}
