use thiserror::Error;

/// iCalendar conversion errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Encoding error: {0}")]
    EncodingError(#[from] serde_json::Error),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
