//! One-token lookahead over a token source.
//!
//! This is the only view of the scanner pipeline the parser has.

use llace_ir::{Token, TokenKind};
use tracing::trace;

use crate::TokenSource;

pub struct ScannerBuffer<S> {
    source: S,
    next: Token,
}

impl<S: TokenSource> ScannerBuffer<S> {
    pub fn new(mut source: S) -> Self {
        let next = source.read_token();
        ScannerBuffer { source, next }
    }

    #[inline]
    pub fn peek_token(&self) -> &Token {
        &self.next
    }

    pub fn read_token(&mut self) -> Token {
        let token = std::mem::replace(&mut self.next, self.source.read_token());
        trace!(kind = ?token.kind, origin = %token.origin, "consumed");
        token
    }

    #[inline]
    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.next.kind == kind
    }

    /// Consume the next token if it has the given kind.
    pub fn advance_token_if(&mut self, kind: TokenKind) -> bool {
        self.read_token_if(kind).is_some()
    }

    /// Consume and return the next token if it has the given kind.
    pub fn read_token_if(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek_token_is(kind) {
            Some(self.read_token())
        } else {
            None
        }
    }

    /// True until the next token is end of file.
    #[inline]
    pub fn has_unconsumed_input(&self) -> bool {
        self.next.kind != TokenKind::Eof
    }
}
