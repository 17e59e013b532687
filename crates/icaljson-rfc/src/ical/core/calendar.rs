//! `VCALENDAR` object (RFC 5545 §3.4).

use serde::{Deserialize, Serialize};

use super::{Event, is_blank};

/// A parsed calendar file.
///
/// `events` is always present, in order of appearance in the source, even
/// when the file contains no events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Calendar {
    /// `PRODID`
    #[serde(skip_serializing_if = "is_blank")]
    pub product_id: Option<String>,
    /// `VERSION`
    #[serde(skip_serializing_if = "is_blank")]
    pub version: Option<String>,
    /// `CALSCALE`
    #[serde(skip_serializing_if = "is_blank")]
    pub calendar_scale: Option<String>,
    /// `METHOD`
    #[serde(skip_serializing_if = "is_blank")]
    pub method: Option<String>,
    pub events: Vec<Event>,
}

impl Calendar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
