//! Property dispatch tables.
//!
//! Each recognized property maps its dispatch key to the field it fills and
//! the interpreter applied to its raw value. Supporting another property is a
//! new table row.

use crate::ical::core::{Calendar, ContentLine, Event, Geolocation};
use crate::ical::expand::timezone::TimeZoneResolver;

use super::values::{
    normalize_datetime, parse_bounded, parse_comma_list, parse_geo, unescape_text,
};

/// How a raw property value is turned into a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Interpreter {
    /// Stored unchanged.
    Raw,
    /// TEXT unescaping.
    Text,
    /// Upper-cased enumeration value.
    Upper,
    /// DATE / DATE-TIME normalization, raw value on failure.
    DateTime,
    /// Comma-separated list; empty values are ignored.
    CommaList,
    /// Integer 0-9; anything else is ignored.
    Priority,
    /// Non-negative integer; anything else is ignored.
    Sequence,
    /// `latitude;longitude`; anything else is ignored.
    Geo,
}

/// An interpreted property value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldValue {
    Text(String),
    List(Vec<String>),
    Integer(u32),
    Geo(Geolocation),
}

impl Interpreter {
    /// Interprets a property value. `None` means the property leaves its
    /// field untouched.
    pub(crate) fn interpret(
        self,
        line: &ContentLine,
        resolver: &mut TimeZoneResolver,
    ) -> Option<FieldValue> {
        let raw = line.raw_value.as_str();
        match self {
            Self::Raw => Some(FieldValue::Text(raw.to_string())),
            Self::Text => Some(FieldValue::Text(unescape_text(raw))),
            Self::Upper => Some(FieldValue::Text(raw.to_uppercase())),
            Self::DateTime => Some(FieldValue::Text(
                normalize_datetime(raw, line.tzid(), resolver).unwrap_or_else(|| raw.to_string()),
            )),
            Self::CommaList => parse_comma_list(raw).map(FieldValue::List),
            Self::Priority => parse_bounded(raw, 0..=9).map(FieldValue::Integer),
            Self::Sequence => parse_bounded(raw, 0..=u32::MAX).map(FieldValue::Integer),
            Self::Geo => parse_geo(raw).map(FieldValue::Geo),
        }
    }
}

/// One row of a dispatch table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PropertyRule<F> {
    pub key: &'static str,
    pub field: F,
    pub interpreter: Interpreter,
}

const fn rule<F>(key: &'static str, field: F, interpreter: Interpreter) -> PropertyRule<F> {
    PropertyRule {
        key,
        field,
        interpreter,
    }
}

/// Returns the rule registered for a dispatch key.
pub(crate) fn lookup<'a, F>(table: &'a [PropertyRule<F>], key: &str) -> Option<&'a PropertyRule<F>> {
    table.iter().find(|rule| rule.key == key)
}

/// Calendar-level fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CalendarField {
    ProductId,
    Version,
    CalendarScale,
    Method,
}

pub(crate) const CALENDAR_PROPERTIES: &[PropertyRule<CalendarField>] = &[
    rule("PRODID", CalendarField::ProductId, Interpreter::Raw),
    rule("VERSION", CalendarField::Version, Interpreter::Raw),
    rule("CALSCALE", CalendarField::CalendarScale, Interpreter::Raw),
    rule("METHOD", CalendarField::Method, Interpreter::Raw),
];

impl CalendarField {
    /// Sets the field. Repeated properties overwrite earlier values.
    #[must_use]
    pub(crate) fn apply(self, calendar: &mut Calendar, value: FieldValue) -> bool {
        let FieldValue::Text(text) = value else {
            return false;
        };
        let slot = match self {
            Self::ProductId => &mut calendar.product_id,
            Self::Version => &mut calendar.version,
            Self::CalendarScale => &mut calendar.calendar_scale,
            Self::Method => &mut calendar.method,
        };
        *slot = Some(text);
        true
    }
}

/// Event fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EventField {
    Uid,
    Stamp,
    Start,
    End,
    Duration,
    Summary,
    Description,
    Location,
    Url,
    Status,
    Categories,
    Classification,
    Transparency,
    Organizer,
    Attendees,
    Priority,
    Sequence,
    Created,
    LastModified,
    RecurrenceRule,
    RecurrenceId,
    ExceptionDates,
    RecurrenceDates,
    Geo,
    Resources,
    Contact,
    RelatedTo,
    Comment,
}

pub(crate) const EVENT_PROPERTIES: &[PropertyRule<EventField>] = &[
    rule("UID", EventField::Uid, Interpreter::Raw),
    rule("DTSTAMP", EventField::Stamp, Interpreter::Raw),
    rule("DTSTART", EventField::Start, Interpreter::DateTime),
    rule("DTSTART;TZID", EventField::Start, Interpreter::DateTime),
    rule("DTEND", EventField::End, Interpreter::DateTime),
    rule("DTEND;TZID", EventField::End, Interpreter::DateTime),
    rule("DURATION", EventField::Duration, Interpreter::Raw),
    rule("SUMMARY", EventField::Summary, Interpreter::Raw),
    rule("DESCRIPTION", EventField::Description, Interpreter::Text),
    rule("LOCATION", EventField::Location, Interpreter::Text),
    rule("URL", EventField::Url, Interpreter::Raw),
    rule("STATUS", EventField::Status, Interpreter::Upper),
    rule("CATEGORIES", EventField::Categories, Interpreter::CommaList),
    rule("CLASS", EventField::Classification, Interpreter::Upper),
    rule("TRANSP", EventField::Transparency, Interpreter::Upper),
    rule("ORGANIZER", EventField::Organizer, Interpreter::Raw),
    rule("ATTENDEE", EventField::Attendees, Interpreter::Raw),
    rule("PRIORITY", EventField::Priority, Interpreter::Priority),
    rule("SEQUENCE", EventField::Sequence, Interpreter::Sequence),
    rule("CREATED", EventField::Created, Interpreter::Raw),
    rule("LAST-MODIFIED", EventField::LastModified, Interpreter::Raw),
    rule("RRULE", EventField::RecurrenceRule, Interpreter::Raw),
    rule("RECURRENCE-ID", EventField::RecurrenceId, Interpreter::Raw),
    rule("RECURRENCE-ID;TZID", EventField::RecurrenceId, Interpreter::Raw),
    rule("EXDATE", EventField::ExceptionDates, Interpreter::Raw),
    rule("EXDATE;TZID", EventField::ExceptionDates, Interpreter::Raw),
    rule("RDATE", EventField::RecurrenceDates, Interpreter::Raw),
    rule("RDATE;TZID", EventField::RecurrenceDates, Interpreter::Raw),
    rule("GEO", EventField::Geo, Interpreter::Geo),
    rule("RESOURCES", EventField::Resources, Interpreter::CommaList),
    rule("CONTACT", EventField::Contact, Interpreter::Raw),
    rule("RELATED-TO", EventField::RelatedTo, Interpreter::Raw),
    rule("COMMENT", EventField::Comment, Interpreter::Text),
];

impl EventField {
    fn scalar(self, event: &mut Event) -> Option<&mut Option<String>> {
        Some(match self {
            Self::Uid => &mut event.uid,
            Self::Stamp => &mut event.stamp,
            Self::Start => &mut event.start,
            Self::End => &mut event.end,
            Self::Duration => &mut event.duration,
            Self::Summary => &mut event.summary,
            Self::Description => &mut event.description,
            Self::Location => &mut event.location,
            Self::Url => &mut event.url,
            Self::Status => &mut event.status,
            Self::Classification => &mut event.classification,
            Self::Transparency => &mut event.transparency,
            Self::Organizer => &mut event.organizer,
            Self::Created => &mut event.created,
            Self::LastModified => &mut event.last_modified,
            Self::RecurrenceRule => &mut event.recurrence_rule,
            Self::RecurrenceId => &mut event.recurrence_id,
            Self::Contact => &mut event.contact,
            Self::RelatedTo => &mut event.related_to,
            Self::Comment => &mut event.comment,
            _ => return None,
        })
    }

    fn list(self, event: &mut Event) -> Option<&mut Vec<String>> {
        Some(match self {
            Self::Categories => &mut event.categories,
            Self::Attendees => &mut event.attendees,
            Self::ExceptionDates => &mut event.exception_dates,
            Self::RecurrenceDates => &mut event.recurrence_dates,
            Self::Resources => &mut event.resources,
            _ => return None,
        })
    }

    /// Stores an interpreted value. Scalar fields are overwritten, list
    /// fields are appended to. Returns `false` if the value does not fit
    /// the field.
    #[must_use]
    pub(crate) fn apply(self, event: &mut Event, value: FieldValue) -> bool {
        match value {
            FieldValue::Text(text) => {
                if let Some(slot) = self.scalar(event) {
                    *slot = Some(text);
                } else if let Some(list) = self.list(event) {
                    list.push(text);
                } else {
                    return false;
                }
            }
            FieldValue::List(items) => {
                let Some(list) = self.list(event) else {
                    return false;
                };
                list.extend(items);
            }
            FieldValue::Integer(number) => match self {
                Self::Priority => event.priority = Some(number),
                Self::Sequence => event.sequence = Some(number),
                _ => return false,
            },
            FieldValue::Geo(geo) => {
                if self != Self::Geo {
                    return false;
                }
                event.geo = Some(geo);
            }
        }
        true
    }
}
