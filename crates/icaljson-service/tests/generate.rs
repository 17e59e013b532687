//! File-level conversion tests.

use std::fs;
use std::path::Path;

use icaljson_service::{FailureKind, ServiceError, generate};
use serde_json::{Value, json};

const CALENDAR: &str = "\
BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//Example Corp//Calendar 1.0//EN\r
BEGIN:VEVENT\r
UID:standup@example.com\r
SUMMARY:Standup\r
DTSTART:20251006T080000Z\r
DTEND:20251006T081500Z\r
CATEGORIES:Daily\r
END:VEVENT\r
END:VCALENDAR\r
";

fn write_input(dir: &Path, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test_log::test]
fn generate_writes_indented_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "team.ics", CALENDAR.as_bytes());
    let output = dir.path().join("out/nested/team.json");

    let calendar = generate(&input, Some(&output)).unwrap();
    assert_eq!(calendar.events.len(), 1);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("{\n  \""));

    let rendered: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        rendered,
        json!({
            "productId": "-//Example Corp//Calendar 1.0//EN",
            "version": "2.0",
            "events": [{
                "uid": "standup@example.com",
                "start": "2025-10-06T08:00:00Z",
                "end": "2025-10-06T08:15:00Z",
                "summary": "Standup",
                "categories": ["Daily"]
            }]
        })
    );
}

#[test_log::test]
fn generate_without_output_only_parses() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "team.ics", CALENDAR.as_bytes());

    let calendar = generate(&input, None).unwrap();

    assert_eq!(calendar.version.as_deref(), Some("2.0"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test_log::test]
fn generate_accepts_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let mut contents = b"BEGIN:VEVENT\nUID:latin1\nSUMMARY:Caf".to_vec();
    contents.extend_from_slice(&[0xE9, b'\n']);
    contents.extend_from_slice(b"END:VEVENT\n");
    let input = write_input(dir.path(), "legacy.ics", &contents);

    let calendar = generate(&input, None).unwrap();

    assert_eq!(calendar.events[0].uid.as_deref(), Some("latin1"));
    assert_eq!(calendar.events[0].summary.as_deref(), Some("Caf\u{FFFD}"));
}

#[test_log::test]
fn missing_input_is_a_stat_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("never.json");

    let error = generate(&dir.path().join("absent.ics"), Some(&output)).unwrap_err();

    assert!(matches!(error, ServiceError::Stat { .. }));
    assert_eq!(error.kind(), FailureKind::Io);
    assert!(error.to_string().starts_with("failed to get file info"));
    assert!(!output.exists());
}

#[test_log::test]
fn unwritable_output_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "team.ics", CALENDAR.as_bytes());
    let blocker = write_input(dir.path(), "blocker", b"");

    let error = generate(&input, Some(&blocker.join("team.json"))).unwrap_err();

    assert!(matches!(error, ServiceError::CreateDir { .. }));
    assert_eq!(fs::read(&blocker).unwrap(), b"");
}
