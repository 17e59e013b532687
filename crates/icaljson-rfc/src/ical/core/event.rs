//! `VEVENT` component (RFC 5545 §3.6.1).

use serde::{Deserialize, Serialize};

use super::is_blank;

/// A single event.
///
/// Date-valued fields hold normalized ISO 8601 strings when the source value
/// could be interpreted, otherwise the raw source text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    /// `UID`, not checked for uniqueness.
    #[serde(skip_serializing_if = "is_blank")]
    pub uid: Option<String>,
    /// `DTSTAMP`, raw.
    #[serde(skip_serializing_if = "is_blank")]
    pub stamp: Option<String>,

    /// `DTSTART`, normalized.
    #[serde(skip_serializing_if = "is_blank")]
    pub start: Option<String>,
    /// `DTEND`, normalized.
    #[serde(skip_serializing_if = "is_blank")]
    pub end: Option<String>,
    /// `DURATION`, raw. Not reconciled with `end`.
    #[serde(skip_serializing_if = "is_blank")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "is_blank")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "is_blank")]
    pub url: Option<String>,
    /// `STATUS`, upper-cased.
    #[serde(skip_serializing_if = "is_blank")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// `CLASS`, upper-cased.
    #[serde(skip_serializing_if = "is_blank")]
    pub classification: Option<String>,
    /// `TRANSP`, upper-cased.
    #[serde(skip_serializing_if = "is_blank")]
    pub transparency: Option<String>,

    #[serde(skip_serializing_if = "is_blank")]
    pub organizer: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<String>,

    /// `PRIORITY`, 0-9.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// `SEQUENCE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,

    /// `CREATED`, raw.
    #[serde(skip_serializing_if = "is_blank")]
    pub created: Option<String>,
    /// `LAST-MODIFIED`, raw.
    #[serde(skip_serializing_if = "is_blank")]
    pub last_modified: Option<String>,

    /// `RRULE`, raw. Occurrences are not expanded.
    #[serde(skip_serializing_if = "is_blank")]
    pub recurrence_rule: Option<String>,
    /// `RECURRENCE-ID`, raw.
    #[serde(skip_serializing_if = "is_blank")]
    pub recurrence_id: Option<String>,
    /// One raw `EXDATE` value per source line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exception_dates: Vec<String>,
    /// One raw `RDATE` value per source line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recurrence_dates: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geolocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub related_to: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub comment: Option<String>,
}

/// `GEO` property value (RFC 5545 §3.8.1.6).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl Event {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
