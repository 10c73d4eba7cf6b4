//! Documentation-handling scanner.
//!
//! Turns `//` comments into tokens the Pratt parser can bind:
//!
//! - consecutive comment lines merge into one `LeadingDocumentation` token;
//! - documentation that follows other code on its line (other than `|`)
//!   becomes `TrailingDocumentation`;
//! - a `SynthDocument` operator token is placed between documentation and
//!   the code it documents;
//! - trailing documentation written after a `,` or `;` is moved in front of
//!   the separator.
//!
//! Resulting token shapes:
//!
//! ```text
//! // doc            LeadingDocumentation SynthDocument x
//! x                 x SynthDocument TrailingDocumentation
//! x,  // doc        x SynthDocument TrailingDocumentation ,
//! ```

use llace_ir::{Token, TokenKind};
use tracing::trace;

use crate::TokenSource;

pub struct DocumentationScanner<S> {
    inner: S,
    ahead1: Token,
    ahead2: Option<Token>,
    ahead3: Option<Token>,
}

impl<S: TokenSource> DocumentationScanner<S> {
    pub fn new(mut inner: S) -> Self {
        let first = inner.read_token();
        if first.kind != TokenKind::Documentation {
            return DocumentationScanner {
                inner,
                ahead1: first,
                ahead2: None,
                ahead3: None,
            };
        }

        let (leading, next) = merge_lines(&mut inner, first);
        let synthetic = Token::synthetic_document(leading.origin.clone());
        DocumentationScanner {
            inner,
            ahead1: leading,
            ahead2: Some(synthetic),
            ahead3: Some(next),
        }
    }
}

impl<S: TokenSource> TokenSource for DocumentationScanner<S> {
    fn read_token(&mut self) -> Token {
        let mut ahead2 = match self.ahead2.take() {
            Some(token) => token,
            None => self.inner.read_token(),
        };

        if ahead2.kind == TokenKind::Documentation {
            let (leading, next) = merge_lines(&mut self.inner, ahead2);
            self.ahead3 = Some(next);
            ahead2 = leading;
        }

        if ahead2.kind == TokenKind::LeadingDocumentation
            && self.ahead1.origin.line() == ahead2.origin.line()
            && self.ahead1.kind != TokenKind::VerticalBar
        {
            trace!(origin = %ahead2.origin, "documentation is trailing");
            ahead2 = Token::new(TokenKind::TrailingDocumentation, ahead2.text, ahead2.origin);
        }

        if ahead2.kind == TokenKind::TrailingDocumentation {
            if matches!(self.ahead1.kind, TokenKind::Comma | TokenKind::Semicolon) {
                trace!(origin = %ahead2.origin, "moving trailing documentation before separator");
                let separator = std::mem::replace(&mut self.ahead1, ahead2);
                self.ahead2 = Some(separator);
                return Token::synthetic_document(self.ahead1.origin.clone());
            }

            if self.ahead1.kind != TokenKind::SynthDocument {
                let synthetic = Token::synthetic_document(ahead2.origin.clone());
                self.ahead2 = Some(ahead2);
                return std::mem::replace(&mut self.ahead1, synthetic);
            }
        }

        let result = std::mem::replace(&mut self.ahead1, ahead2);
        if self.ahead1.kind == TokenKind::LeadingDocumentation {
            self.ahead2 = Some(Token::synthetic_document(self.ahead1.origin.clone()));
        } else {
            self.ahead2 = self.ahead3.take();
        }
        result
    }

    fn is_at_eof(&self) -> bool {
        self.ahead1.kind == TokenKind::Eof
            && self.ahead2.as_ref().map_or(true, |t| t.kind == TokenKind::Eof)
            && self.ahead3.as_ref().map_or(true, |t| t.kind == TokenKind::Eof)
            && self.inner.is_at_eof()
    }
}

/// Merge `first` with the comment lines directly below it.
///
/// Returns the merged `LeadingDocumentation` token and the first token that
/// did not belong to it.
fn merge_lines(inner: &mut impl TokenSource, first: Token) -> (Token, Token) {
    let mut text = first.text;
    let mut last_line = first.origin.line();
    let mut next = inner.read_token();

    while next.kind == TokenKind::Documentation && next.origin.line() == last_line + 1 {
        text.push('\n');
        text.push_str(&next.text);
        last_line = next.origin.line();
        next = inner.read_token();
    }

    trace!(origin = %first.origin, lines = last_line - first.origin.line() + 1, "merged documentation");
    (
        Token::new(TokenKind::LeadingDocumentation, text, first.origin),
        next,
    )
}

#[cfg(test)]
mod tests;
