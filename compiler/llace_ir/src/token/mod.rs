//! Tokens produced by the scanner pipeline.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::Origin;

/// A classified lexeme.
///
/// `text` is the exact source slice, except for punctuation (canonical
/// text), merged tokens (documentation and multiline strings, whose lines
/// are joined with `\n`) and the synthetic document operator.
#[derive(Clone, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub origin: Origin,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, origin: Origin) -> Self {
        Token {
            kind,
            text: text.into(),
            origin,
        }
    }

    /// The operator token that joins documentation to the expression it
    /// annotates.
    pub fn synthetic_document(origin: Origin) -> Self {
        Token::new(TokenKind::SynthDocument, " ", origin)
    }

    /// Non-blank lines of a merged token (documentation or multiline
    /// string), trimmed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {:?}", self.kind, self.text, self.origin)
    }
}
