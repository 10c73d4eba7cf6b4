//! Llace Writer
//!
//! Turns an expression tree back into Llace source text.
//!
//! # Architecture
//!
//! - [`output`]: line-buffered text output with scoped indentation and
//!   vertical-spacing modes
//! - [`writer`]: the expression walk and the spacing heuristic
//! - [`config`]: indentation settings
//!
//! The writer is lossless for canonically laid out source: parsing then
//! writing reproduces the input, documentation and multiline strings
//! included.

pub mod config;
pub mod output;
pub mod writer;

pub use config::{FormatConfig, INDENT_WIDTH};
pub use output::{OutputBuilder, VerticalSpacing};
pub use writer::{item_spacing, ExpressionWriter};

use llace_ir::Expr;

/// Write a single expression.
pub fn format_expr(expr: &Expr) -> String {
    format_expr_with_config(expr, FormatConfig::default())
}

pub fn format_expr_with_config(expr: &Expr, config: FormatConfig) -> String {
    let mut out = OutputBuilder::with_config(config);
    ExpressionWriter::new().write_expr(&mut out, expr);
    out.into_output()
}

/// Write the items of a whole source file without enclosing parentheses.
///
/// ```
/// let items = llace_parse::parse_items("name: string, size: int", "demo.llace").unwrap();
/// assert_eq!(llace_fmt::format_items(&items), "name: string, size: int\n");
/// ```
pub fn format_items(items: &Expr) -> String {
    format_items_with_config(items, FormatConfig::default())
}

pub fn format_items_with_config(items: &Expr, config: FormatConfig) -> String {
    let mut out = OutputBuilder::with_config(config);
    ExpressionWriter::new().write_unparenthesized_items(&mut out, items);
    out.into_output()
}
