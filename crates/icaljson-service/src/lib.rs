//! File-level conversion service: reads an iCalendar file, parses it and
//! persists the rendered JSON.

pub mod error;
pub mod generate;
pub mod input;
pub mod output;

pub use error::{FailureKind, ServiceError, ServiceResult};
pub use generate::generate;
