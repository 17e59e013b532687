//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of content lines.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::ical::core::ContentLine;

/// Joins folded physical lines into logical lines.
///
/// A physical line starting with SPACE or HTAB continues the current logical
/// line; exactly that one whitespace character is removed and no separator is
/// inserted. Every other physical line starts a new logical line. Empty
/// logical lines are never emitted.
///
/// Returns each logical line with the 1-based number of the physical line it
/// started on.
#[must_use]
pub fn unfold_lines<'a, I>(lines: I) -> Vec<(usize, String)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut logical = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (i, raw_line) in lines.into_iter().enumerate() {
        if let Some(continuation) = raw_line.strip_prefix([' ', '\t']) {
            if current.is_empty() {
                start = i + 1;
            }
            current.push_str(continuation);
        } else {
            if !current.is_empty() {
                logical.push((start, std::mem::take(&mut current)));
            }
            start = i + 1;
            current.push_str(raw_line);
        }
    }

    if !current.is_empty() {
        logical.push((start, current));
    }

    logical
}

/// Splits raw calendar text into unfolded logical lines.
///
/// Accepts CRLF and bare LF line endings and ignores a leading byte order mark.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    unfold_lines(input.lines())
}

/// Parses a single logical line.
///
/// Format: `name [";" params] ":" value`. The value starts after the first
/// colon. Of the parameters only `TZID` is kept; any others are dropped.
///
/// ## Errors
/// Returns [`ParseErrorKind::MalformedProperty`] if the line has no colon and
/// [`ParseErrorKind::MissingPropertyName`] if nothing precedes it.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let Some((head, value)) = line.split_once(':') else {
        return Err(ParseError::malformed(line_num, "no colon found"));
    };

    let (name, params) = match head.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (head, None),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::MissingPropertyName,
            line_num,
            "nothing before the colon",
        ));
    }

    Ok(ContentLine {
        name: name.to_ascii_uppercase(),
        tzid: params.and_then(find_tzid),
        raw_value: value.to_string(),
    })
}

/// Finds the `TZID` parameter value, stripping surrounding quotes.
fn find_tzid(params: &str) -> Option<String> {
    params.split(';').find_map(|param| {
        let (key, value) = param.split_once('=')?;
        let value = value.trim().trim_matches('"');
        (key.trim().eq_ignore_ascii_case("TZID") && !value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[(usize, String)]) -> Vec<&str> {
        lines.iter().map(|(_, line)| line.as_str()).collect()
    }

    #[test]
    fn unfold_without_continuations_is_identity() {
        let input = ["BEGIN:VCALENDAR", "VERSION:2.0", "END:VCALENDAR"];
        let result = unfold_lines(input);
        assert_eq!(texts(&result), input);
        assert_eq!(
            result.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn unfold_strips_exactly_one_whitespace_character() {
        let result = unfold_lines(["SUMMARY:Hello", " World"]);
        assert_eq!(texts(&result), ["SUMMARY:HelloWorld"]);

        let result = unfold_lines(["SUMMARY:Hello", "  World"]);
        assert_eq!(texts(&result), ["SUMMARY:Hello World"]);
    }

    #[test]
    fn unfold_tab_continuation() {
        let result = unfold_lines(["DESCRIPTION:First", "\tSecond", " Third"]);
        assert_eq!(texts(&result), ["DESCRIPTION:FirstSecondThird"]);
    }

    #[test]
    fn unfold_reports_starting_line_numbers() {
        let result = unfold_lines(["UID:1", "SUMMARY:Long", " title", "END:VEVENT"]);
        assert_eq!(result[0].0, 1);
        assert_eq!(result[1].0, 2);
        assert_eq!(result[2].0, 4);
    }

    #[test]
    fn unfold_leading_continuation_becomes_its_own_line() {
        let result = unfold_lines([" orphan", "UID:1"]);
        assert_eq!(texts(&result), ["orphan", "UID:1"]);
    }

    #[test]
    fn unfold_never_emits_empty_lines() {
        let result = unfold_lines(["", " ", "UID:1", ""]);
        assert_eq!(texts(&result), ["UID:1"]);
    }

    #[test]
    fn unfold_after_blank_line_does_not_join_previous() {
        let result = unfold_lines(["SUMMARY:A", "", " tail"]);
        assert_eq!(texts(&result), ["SUMMARY:A", "tail"]);
    }

    #[test]
    fn split_lines_handles_crlf_and_bom() {
        let input = "\u{feff}BEGIN:VCALENDAR\r\nSUMMARY:Long\r\n  text\r\nEND:VCALENDAR\r\n";
        let result = split_lines(input);
        assert_eq!(
            texts(&result),
            ["BEGIN:VCALENDAR", "SUMMARY:Long text", "END:VCALENDAR"]
        );
    }

    #[test]
    fn parse_simple_line() {
        let result = parse_content_line("SUMMARY:Team Meeting", 1).unwrap();
        assert_eq!(result.name, "SUMMARY");
        assert!(result.tzid.is_none());
        assert_eq!(result.raw_value, "Team Meeting");
        assert_eq!(result.dispatch_key(), "SUMMARY");
    }

    #[test]
    fn parse_value_keeps_later_colons() {
        let result = parse_content_line("ORGANIZER:mailto:boss@example.com", 1).unwrap();
        assert_eq!(result.name, "ORGANIZER");
        assert_eq!(result.raw_value, "mailto:boss@example.com");
    }

    #[test]
    fn parse_line_with_tzid() {
        let result =
            parse_content_line("DTSTART;TZID=America/New_York:20260123T120000", 1).unwrap();
        assert_eq!(result.name, "DTSTART");
        assert_eq!(result.tzid(), Some("America/New_York"));
        assert_eq!(result.raw_value, "20260123T120000");
        assert_eq!(result.dispatch_key(), "DTSTART;TZID");
    }

    #[test]
    fn parse_line_with_quoted_tzid_after_other_params() {
        let result =
            parse_content_line("DTEND;VALUE=DATE-TIME;tzid=\"Europe/Zurich\":20251004T100000", 1)
                .unwrap();
        assert_eq!(result.tzid(), Some("Europe/Zurich"));
        assert_eq!(result.dispatch_key(), "DTEND;TZID");
    }

    #[test]
    fn parse_line_drops_other_params() {
        let result = parse_content_line("ATTENDEE;CN=Jane;ROLE=CHAIR:mailto:jane@example.com", 1)
            .unwrap();
        assert_eq!(result.name, "ATTENDEE");
        assert!(result.tzid.is_none());
        assert_eq!(result.raw_value, "mailto:jane@example.com");
    }

    #[test]
    fn parse_name_is_upper_cased() {
        let result = parse_content_line("summary:lower case value", 1).unwrap();
        assert_eq!(result.name, "SUMMARY");
        assert_eq!(result.raw_value, "lower case value");
    }

    #[test]
    fn parse_empty_value() {
        let result = parse_content_line("LOCATION:", 1).unwrap();
        assert_eq!(result.raw_value, "");
    }

    #[test]
    fn parse_line_missing_colon() {
        let err = parse_content_line("INVALID", 7).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedProperty);
        assert_eq!(err.line, 7);
    }

    #[test]
    fn parse_line_missing_name() {
        let err = parse_content_line(":value", 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingPropertyName);
    }
}
