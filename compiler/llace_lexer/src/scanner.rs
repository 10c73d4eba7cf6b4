//! Base scanner: characters to tokens.
//!
//! Malformed input never fails here. Unclosed strings and literals,
//! unknown characters and unclassifiable single-quoted literals come out
//! as error-kind tokens carrying the offending text; the parser decides
//! when to report them.

use std::sync::Arc;

use llace_ir::{Origin, Token, TokenKind};
use tracing::{debug, trace};

use crate::cursor::{Cursor, Position};
use crate::{keywords, literal, punctuation, TokenSource};

pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    file: Arc<str>,
    mark: Position,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str, file_name: &str) -> Self {
        let cursor = Cursor::new(source);
        let mark = cursor.position();
        Scanner {
            cursor,
            file: Arc::from(file_name),
            mark,
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    fn origin_from_mark(&self) -> Origin {
        let length = self.cursor.slice_from(self.mark.offset).chars().count();
        Origin::new(
            Arc::clone(&self.file),
            self.mark.line,
            self.mark.column,
            u32::try_from(length).unwrap_or(u32::MAX),
        )
    }

    /// Token whose text is the source from the mark to the cursor.
    fn token_from_mark(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.mark.offset),
            self.origin_from_mark(),
        )
    }

    /// Token whose text is the kind's canonical text.
    fn punctuation_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, kind.text(), self.origin_from_mark())
    }

    // ─── Literals ───

    /// Consume up to and including the closing `quote`.
    ///
    /// A backslash consumes the following character unconditionally. Returns
    /// `false`, leaving the line break unconsumed, if the line or the input
    /// ends first.
    fn read_quoted(&mut self, quote: char) -> bool {
        loop {
            match self.cursor.peek() {
                None | Some('\r' | '\n') => return false,
                Some('\\') => {
                    self.cursor.bump();
                    self.cursor.bump();
                }
                Some(ch) => {
                    self.cursor.bump();
                    if ch == quote {
                        return true;
                    }
                }
            }
        }
    }

    fn read_string_literal(&mut self) -> Token {
        if self.read_quoted('"') {
            self.token_from_mark(TokenKind::StringLiteral)
        } else {
            self.token_from_mark(TokenKind::UnclosedString)
        }
    }

    fn read_single_quoted_literal(&mut self) -> Token {
        if !self.read_quoted('\'') {
            return self.token_from_mark(TokenKind::UnclosedLiteral);
        }
        let kind = literal::classify(self.cursor.slice_from(self.mark.offset));
        self.token_from_mark(kind)
    }

    // ─── Punctuation and identifiers ───

    fn read_punctuation(&mut self, first: char) -> Option<Token> {
        let start = self.mark.offset;

        if let Some(kind) = self.cursor.text_at(start, 3).and_then(punctuation::three_char) {
            self.cursor.bump();
            self.cursor.bump();
            return Some(self.punctuation_token(kind));
        }

        if let Some(kind) = self.cursor.text_at(start, 2).and_then(punctuation::two_char) {
            self.cursor.bump();
            if kind == TokenKind::Documentation {
                self.cursor.eat_to_line_end();
                return Some(self.token_from_mark(kind));
            }
            return Some(self.punctuation_token(kind));
        }

        punctuation::one_char(first).map(|kind| self.punctuation_token(kind))
    }

    fn read_identifier_or_keyword(&mut self) -> Token {
        loop {
            match self.cursor.peek() {
                Some(ch) if is_identifier_part(ch) => {
                    self.cursor.bump();
                }
                // Hyphens join words but never end an identifier.
                Some('-') if self.cursor.peek_second().is_some_and(is_identifier_part) => {
                    self.cursor.bump();
                }
                _ => break,
            }
        }

        let text = self.cursor.slice_from(self.mark.offset);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.token_from_mark(kind)
    }
}

impl TokenSource for Scanner<'_> {
    fn read_token(&mut self) -> Token {
        self.skip_whitespace();
        self.mark = self.cursor.position();

        let Some(ch) = self.cursor.bump() else {
            return self.token_from_mark(TokenKind::Eof);
        };

        let token = match ch {
            '0'..='9' => {
                self.cursor.eat_while(|c| c.is_ascii_digit());
                self.token_from_mark(TokenKind::IntegerLiteral)
            }
            '`' => {
                self.cursor.eat_to_line_end();
                self.token_from_mark(TokenKind::BackTickedString)
            }
            '"' => self.read_string_literal(),
            '\'' => self.read_single_quoted_literal(),
            _ => match self.read_punctuation(ch) {
                Some(token) => token,
                None if is_identifier_start(ch) => self.read_identifier_or_keyword(),
                None => self.token_from_mark(TokenKind::UnrecognizedChar),
            },
        };

        if token.kind.is_error() {
            debug!(kind = ?token.kind, origin = %token.origin, text = %token.text, "lexical error");
        } else {
            trace!(kind = ?token.kind, origin = %token.origin, "scanned");
        }
        token
    }

    fn is_at_eof(&self) -> bool {
        self.cursor.rest().chars().all(is_whitespace)
    }
}

#[inline]
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

#[inline]
fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[inline]
fn is_identifier_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
