//! Tokenizer error types.

/// Result type for content line tokenization.
pub type ParseResult<T> = Result<T, ParseError>;

/// A logical line that could not be tokenized.
///
/// The builder only logs these; they never abort a parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based physical line the logical line started on.
    pub line: usize,
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::MalformedProperty, line, message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// No `:` between name and value.
    #[error("malformed property")]
    MalformedProperty,
    /// Nothing before the `:`.
    #[error("missing property name")]
    MissingPropertyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_kind() {
        let error = ParseError::malformed(7, "no colon found");
        assert_eq!(error.to_string(), "line 7: malformed property: no colon found");
    }
}
