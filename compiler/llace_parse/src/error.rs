//! Parse errors.
//!
//! Parsing is fail-fast: the first lexical or syntax error ends the parse
//! unit and is returned as a single [`ParseError`].

use std::fmt;

use llace_ir::{Origin, Token, TokenKind};

/// Error codes for parse diagnostics.
///
/// - E0xxx: lexical errors, reported when the parser reaches the token
/// - E1xxx: syntax errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// String literal runs past the end of its line
    E0001,
    /// Single-quoted literal runs past the end of its line
    E0002,
    /// Character that starts no token
    E0003,
    /// Single-quoted literal of no known form
    E0004,

    /// Unexpected token
    E1001,
    /// Array index postfix (`x[i]`)
    E1002,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
        }
    }

    /// Code for an error-kind token, `None` for every other kind.
    pub const fn for_lexical_error(kind: TokenKind) -> Option<ErrorCode> {
        match kind {
            TokenKind::UnclosedString => Some(ErrorCode::E0001),
            TokenKind::UnclosedLiteral => Some(ErrorCode::E0002),
            TokenKind::UnrecognizedChar => Some(ErrorCode::E0003),
            TokenKind::UnrecognizedLiteral => Some(ErrorCode::E0004),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub origin: Origin,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, origin: Origin) -> Self {
        ParseError {
            code,
            message: message.into(),
            origin,
        }
    }

    /// The parser needed one of `expected` but found `found`.
    #[cold]
    pub fn expected_one_of(expected: &[TokenKind], found: &Token) -> Self {
        let expected = expected
            .iter()
            .map(|kind| kind.text())
            .collect::<Vec<_>>()
            .join(",");
        ParseError::new(
            ErrorCode::E1001,
            format!(
                "Expected one of ({expected}). Instead saw {} '{}' at {}.",
                found.kind.text(),
                found.text,
                found.origin
            ),
            found.origin.clone(),
        )
    }

    /// An error-kind token reached the parser.
    #[cold]
    pub fn lexical(code: ErrorCode, token: &Token) -> Self {
        ParseError::new(
            code,
            format!(
                "Lexical error: {} '{}' at {}.",
                token.kind.text(),
                token.text,
                token.origin
            ),
            token.origin.clone(),
        )
    }

    /// `origin` is the `[` that opened the index.
    #[cold]
    pub fn unsupported_index(origin: Origin) -> Self {
        let message = format!("Array index expressions are not supported at {origin}.");
        ParseError::new(ErrorCode::E1002, message, origin)
    }
}
