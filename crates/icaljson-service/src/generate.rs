//! Conversion of one iCalendar file.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use icaljson_rfc::ical::{Calendar, parse, to_json_bytes};

use crate::error::{ServiceError, ServiceResult};
use crate::output::persist;

/// ## Summary
/// Reads and parses the calendar at `ics_path`.
///
/// When `output_path` is given, the calendar is also rendered as JSON and
/// written there. The parsed calendar is returned either way.
///
/// The file is read whole; bytes that are not valid UTF-8 are replaced
/// rather than rejected.
///
/// ## Errors
/// Returns `Stat`, `Open` or `Read` when the input cannot be read, `Encode`
/// when rendering fails, and `CreateDir` or `Write` when the output cannot
/// be persisted. No output file is left behind on failure.
#[tracing::instrument(skip_all, fields(
    ics_path = %ics_path.display(),
    output_path = ?output_path.map(Path::display)
))]
pub fn generate(ics_path: &Path, output_path: Option<&Path>) -> ServiceResult<Calendar> {
    let metadata = fs::metadata(ics_path).map_err(|source| ServiceError::Stat {
        path: ics_path.to_path_buf(),
        source,
    })?;
    tracing::debug!(size = metadata.len(), "Reading calendar file");

    let mut file = File::open(ics_path).map_err(|source| ServiceError::Open {
        path: ics_path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or_default());
    file.read_to_end(&mut bytes)
        .map_err(|source| ServiceError::Read {
            path: ics_path.to_path_buf(),
            source,
        })?;

    let calendar = parse(&String::from_utf8_lossy(&bytes));

    if let Some(output_path) = output_path {
        let json = to_json_bytes(&calendar)?;
        persist(output_path, &json)?;
        tracing::info!(events = calendar.events.len(), "Calendar converted");
    }

    Ok(calendar)
}
