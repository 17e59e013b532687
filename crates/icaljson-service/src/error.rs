use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Service layer errors, one variant per failure site.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("ICS file '{}' does not exist", path.display())]
    InputNotFound { path: PathBuf },

    #[error("'{}' does not appear to be a ICS file", path.display())]
    NotIcalFile { path: PathBuf },

    #[error("failed to get file info for '{}': {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open ICS file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read ICS file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to marshal JSON: {0}")]
    Encode(#[from] icaljson_rfc::error::RfcError),

    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output path cannot be empty")]
    EmptyOutputPath,

    #[error("output path '{}' is not writable: {source}", path.display())]
    OutputNotWritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse classification of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Io,
    Encoding,
    InvalidInput,
}

impl ServiceError {
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Stat { .. }
            | Self::Open { .. }
            | Self::Read { .. }
            | Self::CreateDir { .. }
            | Self::Write { .. }
            | Self::OutputNotWritable { .. } => FailureKind::Io,
            Self::Encode(_) => FailureKind::Encoding,
            Self::InputNotFound { .. } | Self::NotIcalFile { .. } | Self::EmptyOutputPath => {
                FailureKind::InvalidInput
            }
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Io => "io failure",
            Self::Encoding => "encoding failure",
            Self::InvalidInput => "invalid input",
        };
        f.write_str(name)
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_render_their_cause() {
        let error = ServiceError::Write {
            path: PathBuf::from("out/calendar.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(
            error.to_string(),
            "failed to write file 'out/calendar.json': denied"
        );
        assert_eq!(error.kind(), FailureKind::Io);
    }

    #[test]
    fn invalid_input_is_classified() {
        assert_eq!(
            ServiceError::EmptyOutputPath.kind(),
            FailureKind::InvalidInput
        );
        assert_eq!(FailureKind::InvalidInput.to_string(), "invalid input");
    }
}
