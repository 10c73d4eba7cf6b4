//! Formatter configuration.

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Configuration for the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Indentation size in spaces.
    /// Defaults to 4, the indent unit of canonical Llace layout.
    pub indent_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: INDENT_WIDTH,
        }
    }
}

impl FormatConfig {
    /// Create a new config with the specified indent width.
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self { indent_width }
    }
}
