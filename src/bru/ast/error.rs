//! Parse error types
//!
//! A parse either produces a whole document or exactly one [`ParseError`].
//! There is no partial result: a request that was only half understood is
//! not safe to execute.

use std::fmt;
use thiserror::Error;

use super::position::SourceLocation;
use super::span::Position;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Text at block level that does not start with a known block keyword
    UnknownBlock,
    /// A block was opened but never closed before the end of input
    UnterminatedBlock,
    /// A dictionary entry without a `:` after its key
    MalformedPair,
    /// A `body:json` block whose content is not a valid literal
    InvalidLiteral,
    /// A boolean field that could not be read. Recovered locally and never
    /// returned from a parse.
    InvalidBoolean,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnknownBlock => "unknown block",
            ErrorKind::UnterminatedBlock => "unterminated block",
            ErrorKind::MalformedPair => "malformed pair",
            ErrorKind::InvalidLiteral => "invalid literal",
            ErrorKind::InvalidBoolean => "invalid boolean",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fatal parse failure with its location and a description of what was
/// expected there
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {position}: {message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Byte offset into the source
    pub offset: usize,
    pub position: Position,
    pub message: String,
}

impl ParseError {
    /// Build an error, resolving the byte offset against the source
    pub fn new(kind: ErrorKind, source: &str, offset: usize, message: impl Into<String>) -> Self {
        let position = SourceLocation::new(source).byte_to_position(offset);
        Self {
            kind,
            offset,
            position,
            message: message.into(),
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_resolves_position() {
        let source = "headers {\n  X-Foo bar\n}";
        let err = ParseError::new(ErrorKind::MalformedPair, source, 18, "expected `:` after key");

        assert_eq!(err.line(), 1);
        assert_eq!(err.column(), 8);
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::new(ErrorKind::UnknownBlock, "nope", 0, "expected a block keyword");
        assert_eq!(
            err.to_string(),
            "unknown block at 1:1: expected a block keyword"
        );
    }
}
