//! Calendar builder (RFC 5545 §3.4, §3.6.1).
//!
//! A single-pass reducer over logical lines with two states: outside or
//! inside a `VEVENT`. `BEGIN`/`END` of any other component leaves the state
//! unchanged, so components are not recursed into: properties of a `VALARM`
//! inside an event are applied to that event, and an unclosed vendor block
//! does not hide the events after it. Malformed lines and uninterpretable
//! values are dropped without failing the parse.

use super::lexer::{parse_content_line, split_lines, unfold_lines};
use super::properties::{CALENDAR_PROPERTIES, EVENT_PROPERTIES, lookup};
use crate::ical::core::{Calendar, ContentLine, Event};
use crate::ical::expand::timezone::TimeZoneResolver;

const CALENDAR_COMPONENT: &str = "VCALENDAR";
const EVENT_COMPONENT: &str = "VEVENT";

/// Parses an iCalendar document from a string.
///
/// Never fails: lines that cannot be tokenized are skipped and an event
/// without a matching `END:VEVENT` is discarded.
#[must_use]
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> Calendar {
    tracing::debug!("Parsing iCalendar document");
    build(split_lines(input))
}

/// Parses an iCalendar document from already split physical lines.
#[must_use]
pub fn parse_lines<'a, I>(lines: I) -> Calendar
where
    I: IntoIterator<Item = &'a str>,
{
    build(unfold_lines(lines))
}

fn build(lines: Vec<(usize, String)>) -> Calendar {
    tracing::trace!(count = lines.len(), "Unfolded lines");

    let mut builder = CalendarBuilder::new();
    for (line_num, line) in &lines {
        builder.consume(*line_num, line);
    }
    builder.finish()
}

/// Where the builder is relative to the event component.
#[derive(Debug, Default)]
enum BuilderState {
    #[default]
    OutsideEvent,
    InsideEvent(Box<Event>),
}

/// Accumulates a [`Calendar`] from logical lines.
#[derive(Debug, Default)]
pub struct CalendarBuilder {
    calendar: Calendar,
    state: BuilderState,
    resolver: TimeZoneResolver,
    malformed: usize,
}

impl CalendarBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Consumes one logical line.
    ///
    /// `line_num` is only used for diagnostics.
    pub fn consume(&mut self, line_num: usize, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let content_line = match parse_content_line(line, line_num) {
            Ok(content_line) => content_line,
            Err(error) => {
                tracing::debug!(%error, "Skipping malformed line");
                self.malformed += 1;
                return;
            }
        };

        match content_line.name.as_str() {
            "BEGIN" => self.begin(&component_name(&content_line)),
            "END" => self.end(&component_name(&content_line)),
            _ => self.property(&content_line),
        }
    }

    fn begin(&mut self, component: &str) {
        match (&self.state, component) {
            (BuilderState::OutsideEvent, EVENT_COMPONENT) => {
                self.state = BuilderState::InsideEvent(Box::default());
            }
            (BuilderState::InsideEvent(event), EVENT_COMPONENT) => {
                tracing::warn!(uid = ?event.uid, "Discarding event without END:VEVENT");
                self.state = BuilderState::InsideEvent(Box::default());
            }
            (_, CALENDAR_COMPONENT) => {}
            _ => tracing::debug!(component, "Ignoring BEGIN of unsupported component"),
        }
    }

    fn end(&mut self, component: &str) {
        if component == EVENT_COMPONENT
            && let BuilderState::InsideEvent(event) = std::mem::take(&mut self.state)
        {
            tracing::trace!(uid = ?event.uid, "Event complete");
            self.calendar.events.push(*event);
            return;
        }

        tracing::trace!(component, "Ignoring END");
    }

    fn property(&mut self, line: &ContentLine) {
        let key = line.dispatch_key();
        match &mut self.state {
            BuilderState::OutsideEvent => {
                let Some(rule) = lookup(CALENDAR_PROPERTIES, &key) else {
                    tracing::trace!(%key, "Ignoring calendar property");
                    return;
                };
                let applied = rule
                    .interpreter
                    .interpret(line, &mut self.resolver)
                    .is_some_and(|value| rule.field.apply(&mut self.calendar, value));
                if !applied {
                    tracing::debug!(%key, value = %line.raw_value, "Ignoring invalid value");
                }
            }
            BuilderState::InsideEvent(event) => {
                let Some(rule) = lookup(EVENT_PROPERTIES, &key) else {
                    tracing::trace!(%key, "Ignoring event property");
                    return;
                };
                let applied = rule
                    .interpreter
                    .interpret(line, &mut self.resolver)
                    .is_some_and(|value| rule.field.apply(event, value));
                if !applied {
                    tracing::debug!(%key, value = %line.raw_value, "Ignoring invalid value");
                }
            }
        }
    }

    /// ## Summary
    /// Finishes the pass and returns the calendar.
    ///
    /// An event still open at this point is discarded.
    #[must_use]
    pub fn finish(self) -> Calendar {
        if let BuilderState::InsideEvent(event) = &self.state {
            tracing::warn!(uid = ?event.uid, "Discarding event without END:VEVENT at end of input");
        }

        tracing::info!(
            events = self.calendar.events.len(),
            malformed = self.malformed,
            "Parsed calendar"
        );
        self.calendar
    }
}

fn component_name(line: &ContentLine) -> String {
    line.raw_value.trim().to_ascii_uppercase()
}
