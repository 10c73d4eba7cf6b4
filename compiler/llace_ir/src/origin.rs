//! Source locations.

use std::fmt;
use std::sync::Arc;

/// Location of a token or expression in a source file.
///
/// `line` and `column` are 1-based; `length` counts characters. The file
/// name is shared between all origins of one parse unit.
///
/// Origins are diagnostic payload only: two trees that differ only in their
/// origins compare equal (see [`Expr`](crate::Expr)).
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Origin {
    file: Arc<str>,
    line: u32,
    column: u32,
    length: u32,
}

impl Origin {
    pub fn new(file: Arc<str>, line: u32, column: u32, length: u32) -> Self {
        Origin {
            file,
            line,
            column,
            length,
        }
    }

    /// Origin for tokens and nodes built outside any source file.
    pub fn synthetic() -> Self {
        Origin::new(Arc::from("<synthetic>"), 1, 1, 0)
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }
}

/// Renders as `file(line,column)`, the form used in diagnostics.
impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.file, self.line, self.column)
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{})+{}",
            self.file, self.line, self.column, self.length
        )
    }
}
