//! Value interpreters for iCalendar property values (RFC 5545 §3.3).
//!
//! Every interpreter is lenient: a value that cannot be interpreted yields
//! `None` and the caller decides on the fallback.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};

use crate::ical::core::Geolocation;
use crate::ical::expand::timezone::{TimeZoneResolver, convert_to_utc};

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g., "19970714")
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year = s[0..4].parse().ok()?;
    let month = s[4..6].parse().ok()?;
    let day = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a TIME value (RFC 5545 §3.3.12) without the UTC designator.
///
/// Format: HHMMSS (e.g., "133000")
#[must_use]
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour = s[0..2].parse().ok()?;
    let minute = s[2..4].parse().ok()?;
    let second = s[4..6].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5).
///
/// Format: YYYYMMDD"T"HHMMSS[Z]. Returns the wall-clock value and whether it
/// carried the UTC designator.
#[must_use]
pub fn parse_datetime(s: &str) -> Option<(NaiveDateTime, bool)> {
    let (date_str, time_str) = s.split_once('T')?;
    let (time_str, is_utc) = match time_str.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (time_str, false),
    };

    let date = parse_date(date_str)?;
    let time = parse_time(time_str)?;
    Some((date.and_time(time), is_utc))
}

/// Normalizes a DATE or DATE-TIME value to ISO 8601.
///
/// - `20251004T090000Z` becomes `2025-10-04T09:00:00Z`.
/// - `20251004T090000` with a resolvable `tzid` is converted to UTC the same
///   way; without one (or when the zone is unknown) it becomes the floating
///   `2025-10-04T09:00:00`.
/// - `20251004` becomes `2025-10-04`.
///
/// Returns `None` for anything else.
#[must_use]
pub fn normalize_datetime(
    raw: &str,
    tzid: Option<&str>,
    resolver: &mut TimeZoneResolver,
) -> Option<String> {
    if let Some((local, is_utc)) = parse_datetime(raw) {
        if is_utc {
            return Some(
                local
                    .and_utc()
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            );
        }

        if let Some(tzid) = tzid {
            match convert_to_utc(local, tzid, resolver) {
                Ok(utc) => return Some(utc.to_rfc3339_opts(SecondsFormat::Secs, true)),
                Err(error) => {
                    tracing::debug!(%error, "Keeping floating time");
                }
            }
        }

        return Some(local.format("%Y-%m-%dT%H:%M:%S").to_string());
    }

    parse_date(raw).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Unescapes a TEXT value (RFC 5545 §3.3.11).
///
/// Handles `\n`, `\N`, `\,`, `\;` and `\\` in a single left-to-right scan, so
/// the output of one escape is never read as part of another.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n' | 'N') => result.push('\n'),
                Some(',') => result.push(','),
                Some(';') => result.push(';'),
                Some('\\') | None => result.push('\\'),
                Some(other) => {
                    // Unknown escape, preserve as-is
                    result.push('\\');
                    result.push(other);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Parses an INTEGER value (RFC 5545 §3.3.8).
///
/// Returns `None` rather than a default so that a real `0` stays
/// distinguishable from a missing or invalid value.
#[must_use]
pub fn parse_integer(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// Parses an integer that must lie within `bounds`, as used by `PRIORITY`
/// and `SEQUENCE`.
#[must_use]
pub fn parse_bounded(s: &str, bounds: std::ops::RangeInclusive<u32>) -> Option<u32> {
    let value = u32::try_from(parse_integer(s)?).ok()?;
    bounds.contains(&value).then_some(value)
}

/// Splits a comma-separated list, trimming each element.
///
/// Returns `None` for an empty value.
#[must_use]
pub fn parse_comma_list(s: &str) -> Option<Vec<String>> {
    if s.is_empty() {
        return None;
    }

    Some(s.split(',').map(|item| item.trim().to_string()).collect())
}

/// Parses a GEO value (RFC 5545 §3.8.1.6): `latitude;longitude`.
///
/// Anything other than exactly two finite floats yields `None`.
#[must_use]
pub fn parse_geo(s: &str) -> Option<Geolocation> {
    let mut parts = s.split(';');
    let (Some(latitude), Some(longitude), None) = (parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let latitude = parse_float(latitude)?;
    let longitude = parse_float(longitude)?;
    Some(Geolocation {
        latitude,
        longitude,
    })
}

/// Parses a FLOAT value (RFC 5545 §3.3.7).
#[must_use]
pub fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
