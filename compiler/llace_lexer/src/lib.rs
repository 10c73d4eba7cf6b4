//! Scanner pipeline for Llace.
//!
//! Source text flows through four stages, each pulling from the one before:
//!
//! ```text
//! Scanner -> DocumentationScanner -> MultilineStringScanner -> ScannerBuffer
//! ```
//!
//! [`scan`] builds the whole chain. Each stage only reads as far ahead as it
//! needs (at most three tokens), so scanning is fully lazy.

mod buffer;
mod cursor;
mod documentation;
mod keywords;
mod literal;
mod multiline;
mod punctuation;
mod scanner;

pub use buffer::ScannerBuffer;
pub use documentation::DocumentationScanner;
pub use multiline::MultilineStringScanner;
pub use scanner::Scanner;

use llace_ir::Token;

/// A pull-based stream of tokens.
///
/// After end of input, `read_token` keeps returning `Eof` tokens.
pub trait TokenSource {
    fn read_token(&mut self) -> Token;

    /// True when no tokens other than `Eof` remain.
    fn is_at_eof(&self) -> bool;
}

/// The full decorator chain over one source text, ready to be buffered.
pub type LlaceTokens<'src> = MultilineStringScanner<DocumentationScanner<Scanner<'src>>>;

/// Build the scanner pipeline for `source`. `file_name` appears in every
/// token origin.
pub fn scan<'src>(source: &'src str, file_name: &str) -> ScannerBuffer<LlaceTokens<'src>> {
    ScannerBuffer::new(MultilineStringScanner::new(DocumentationScanner::new(
        Scanner::new(source, file_name),
    )))
}
