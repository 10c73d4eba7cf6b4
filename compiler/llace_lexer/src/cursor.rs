//! Character cursor with line and column tracking.
//!
//! Positions are kept as byte offsets into the source so slicing is free;
//! lines and columns count characters and are 1-based.

use memchr::memchr2;

/// A point in the source, recorded as a token's mark.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

pub(crate) struct Cursor<'src> {
    source: &'src str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Cursor {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    #[inline]
    pub(crate) fn rest(&self) -> &'src str {
        &self.source[self.offset..]
    }

    /// Up to `len` bytes starting at `offset`, if they form a valid slice.
    #[inline]
    pub(crate) fn text_at(&self, offset: usize, len: usize) -> Option<&'src str> {
        self.source.get(offset..offset + len)
    }

    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.offset]
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub(crate) fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Consume one character. `None` at end of input.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    pub(crate) fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while self.peek().is_some_and(&mut predicate) {
            self.bump();
        }
    }

    /// Consume everything up to (not including) the next `\r` or `\n`.
    pub(crate) fn eat_to_line_end(&mut self) {
        let rest = self.rest();
        let len = memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let consumed = &rest[..len];
        self.offset += len;
        self.column += u32::try_from(consumed.chars().count()).unwrap_or(u32::MAX);
    }
}

#[cfg(test)]
mod tests;
