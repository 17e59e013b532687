//! Input file checks performed before conversion.

use std::path::Path;

use icaljson_core::constants::ICAL_EXTENSIONS;

use crate::error::{ServiceError, ServiceResult};

/// Returns whether the path carries one of the accepted calendar extensions.
///
/// The comparison ignores ASCII case. The extension is only a hint; the
/// parser never looks at it.
#[must_use]
pub fn is_ical_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ICAL_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// ## Summary
/// Checks that `path` names an existing regular file with a calendar
/// extension.
///
/// ## Errors
/// Returns `InputNotFound` if the path does not exist or is not a regular
/// file, and `NotIcalFile` if its extension is not accepted.
pub fn validate_input(path: &Path) -> ServiceResult<()> {
    if !path.is_file() {
        return Err(ServiceError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    if !is_ical_file(path) {
        return Err(ServiceError::NotIcalFile {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_extensions_ignore_case() {
        assert!(is_ical_file(Path::new("calendar.ics")));
        assert!(is_ical_file(Path::new("calendar.ICS")));
        assert!(is_ical_file(Path::new("dir/calendar.Ical")));
        assert!(is_ical_file(Path::new("export.txt")));
    }

    #[test]
    fn other_extensions_are_rejected() {
        assert!(!is_ical_file(Path::new("calendar.json")));
        assert!(!is_ical_file(Path::new("calendar")));
        assert!(!is_ical_file(Path::new("ics")));
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.ics");

        let error = validate_input(&missing).unwrap_err();
        assert!(matches!(error, ServiceError::InputNotFound { .. }));

        let error = validate_input(dir.path()).unwrap_err();
        assert!(matches!(error, ServiceError::InputNotFound { .. }));
    }

    #[test]
    fn wrong_extension_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.json");
        std::fs::write(&path, "BEGIN:VCALENDAR\n").unwrap();

        let error = validate_input(&path).unwrap_err();
        assert!(matches!(error, ServiceError::NotIcalFile { .. }));
    }
}
