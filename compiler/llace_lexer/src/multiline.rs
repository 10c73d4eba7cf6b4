//! Merges back-ticked lines on consecutive source lines into one
//! `MultilineString` token. A lone back-ticked line becomes a one-line
//! multiline string.

use llace_ir::{Token, TokenKind};
use tracing::trace;

use crate::TokenSource;

pub struct MultilineStringScanner<S> {
    inner: S,
    ahead: Option<Token>,
}

impl<S: TokenSource> MultilineStringScanner<S> {
    pub fn new(inner: S) -> Self {
        MultilineStringScanner { inner, ahead: None }
    }
}

impl<S: TokenSource> TokenSource for MultilineStringScanner<S> {
    fn read_token(&mut self) -> Token {
        let first = match self.ahead.take() {
            Some(token) => token,
            None => self.inner.read_token(),
        };
        if first.kind != TokenKind::BackTickedString {
            return first;
        }

        let mut text = first.text;
        let mut last_line = first.origin.line();
        let mut next = self.inner.read_token();
        while next.kind == TokenKind::BackTickedString && next.origin.line() == last_line + 1 {
            text.push('\n');
            text.push_str(&next.text);
            last_line = next.origin.line();
            next = self.inner.read_token();
        }
        self.ahead = Some(next);

        trace!(origin = %first.origin, lines = last_line - first.origin.line() + 1, "merged multiline string");
        Token::new(TokenKind::MultilineString, text, first.origin)
    }

    fn is_at_eof(&self) -> bool {
        self.ahead.as_ref().map_or(true, |t| t.kind == TokenKind::Eof) && self.inner.is_at_eof()
    }
}
