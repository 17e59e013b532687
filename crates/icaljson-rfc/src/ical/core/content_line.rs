//! Tokenized content line (RFC 5545 §3.1).

use std::borrow::Cow;

/// A logical line split into property name, timezone and raw value.
///
/// Parameters other than `TZID` are dropped during tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Base property name, upper-cased.
    pub name: String,
    /// Value of the `TZID` parameter, if present.
    pub tzid: Option<String>,
    /// Raw value after the first colon, before any unescaping.
    pub raw_value: String,
}

impl ContentLine {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            tzid: None,
            raw_value: value.into(),
        }
    }

    #[must_use]
    pub fn with_tzid(mut self, tzid: impl Into<String>) -> Self {
        self.tzid = Some(tzid.into());
        self
    }

    /// ## Summary
    /// Returns the key used to look up the property handler.
    ///
    /// Timezone-qualified properties get a `;TZID` suffix, so `DTSTART` and
    /// `DTSTART;TZID=Europe/Zurich` resolve to `DTSTART` and `DTSTART;TZID`.
    #[must_use]
    pub fn dispatch_key(&self) -> Cow<'_, str> {
        if self.tzid.is_some() {
            Cow::Owned(format!("{};TZID", self.name))
        } else {
            Cow::Borrowed(&self.name)
        }
    }

    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.tzid.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_key_without_timezone() {
        let line = ContentLine::new("summary", "Team Meeting");
        assert_eq!(line.name, "SUMMARY");
        assert_eq!(line.dispatch_key(), "SUMMARY");
    }

    #[test]
    fn dispatch_key_with_timezone() {
        let line = ContentLine::new("DTSTART", "20251004T090000").with_tzid("Europe/Zurich");
        assert_eq!(line.dispatch_key(), "DTSTART;TZID");
        assert_eq!(line.tzid(), Some("Europe/Zurich"));
    }
}
