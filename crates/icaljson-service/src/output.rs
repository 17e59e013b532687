//! Output path resolution and persistence of rendered JSON.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use icaljson_core::constants::DEFAULT_OUTPUT_SUFFIX;
use tempfile::NamedTempFile;

use crate::error::{ServiceError, ServiceResult};

/// Returns `<input stem>_parsed.json`, relative to the working directory.
#[must_use]
pub fn default_output_path(ics_path: &Path) -> PathBuf {
    let mut name = ics_path
        .file_stem()
        .map_or_else(OsString::new, ToOwned::to_owned);
    name.push(DEFAULT_OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Directory that will hold `path`, `None` for a bare file name.
fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|parent| !parent.as_os_str().is_empty())
}

fn ensure_dir(dir: &Path) -> ServiceResult<()> {
    fs::create_dir_all(dir).map_err(|source| ServiceError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// ## Summary
/// Checks that a file can be written at `path` before any work is done.
///
/// Creates the parent directory if needed, then creates and removes a probe
/// file `<path>.tmp` next to the target.
///
/// ## Errors
/// Returns `EmptyOutputPath` for an empty path, `CreateDir` if the parent
/// directory cannot be created and `OutputNotWritable` if the probe fails.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn validate_output_path(path: &Path) -> ServiceResult<()> {
    if path.as_os_str().is_empty() {
        return Err(ServiceError::EmptyOutputPath);
    }

    if let Some(dir) = parent_dir(path) {
        ensure_dir(dir)?;
    }

    let mut probe = path.as_os_str().to_owned();
    probe.push(".tmp");
    let probe = PathBuf::from(probe);

    let not_writable = |source| ServiceError::OutputNotWritable {
        path: path.to_path_buf(),
        source,
    };
    fs::File::create(&probe).map_err(not_writable)?;
    fs::remove_file(&probe).map_err(not_writable)?;

    tracing::debug!("Output path is writable");
    Ok(())
}

/// ## Summary
/// Writes `bytes` to `path`, creating intermediate directories.
///
/// The bytes go to a temporary file in the destination directory which is
/// then renamed over `path`, so an existing file is either fully replaced or
/// left untouched.
///
/// ## Errors
/// Returns `CreateDir` if the destination directory cannot be created and
/// `Write` if the temporary file cannot be written or renamed.
#[tracing::instrument(skip_all, fields(path = %path.display(), bytes = bytes.len()))]
pub fn persist(path: &Path, bytes: &[u8]) -> ServiceResult<()> {
    let dir = parent_dir(path).unwrap_or_else(|| Path::new("."));
    ensure_dir(dir)?;

    let write_error = |source| ServiceError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    tracing::debug!("Output written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_uses_input_stem() {
        assert_eq!(
            default_output_path(Path::new("/data/work/team.ics")),
            PathBuf::from("team_parsed.json")
        );
        assert_eq!(
            default_output_path(Path::new("export.v2.ical")),
            PathBuf::from("export.v2_parsed.json")
        );
    }

    #[test_log::test]
    fn empty_output_path_is_rejected() {
        let error = validate_output_path(Path::new("")).unwrap_err();
        assert!(matches!(error, ServiceError::EmptyOutputPath));
    }

    #[test_log::test]
    fn validation_creates_parent_and_leaves_no_probe() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/deeper/out.json");

        validate_output_path(&target).unwrap();

        assert!(dir.path().join("nested/deeper").is_dir());
        assert!(!dir.path().join("nested/deeper/out.json.tmp").exists());
        assert!(!target.exists());
    }

    #[test_log::test]
    fn validation_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let error = validate_output_path(&blocker.join("out.json")).unwrap_err();
        assert!(matches!(error, ServiceError::CreateDir { .. }));
    }

    #[test_log::test]
    fn persist_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out/calendar.json");

        persist(&target, b"{\"events\": []}").unwrap();
        persist(&target, b"{}").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"{}");
        let entries = fs::read_dir(dir.path().join("out")).unwrap().count();
        assert_eq!(entries, 1);
    }
}
