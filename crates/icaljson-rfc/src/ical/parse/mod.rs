//! iCalendar parser (RFC 5545).
//!
//! Parsing runs in a single forward pass: [`lexer`] unfolds physical lines
//! into logical lines and tokenizes them, [`parser`] walks the logical lines
//! and fills in the [`Calendar`](crate::ical::core::Calendar) model using the
//! property table in `properties` and the interpreters in [`values`].

mod error;
pub mod lexer;
pub mod parser;
mod properties;
pub mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{parse_content_line, split_lines, unfold_lines};
pub use parser::{parse, parse_lines};
