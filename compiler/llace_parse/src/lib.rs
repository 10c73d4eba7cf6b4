//! Llace parser.
//!
//! A Pratt parser over the scanner pipeline of `llace_lexer`. Operator
//! precedence comes from [`binding_power`]; documentation is attached by the
//! same machinery through the synthetic document operator.
//!
//! Parsing stops at the first error; there is no recovery.

pub mod binding_power;
mod error;
mod parser;

pub use error::{ErrorCode, ParseError};
pub use parser::Parser;

use llace_ir::Expr;
use tracing::debug;

/// Parse `source` as exactly one expression.
pub fn parse_expression(source: &str, file_name: &str) -> Result<Expr, ParseError> {
    debug!(file = file_name, "parsing expression");
    let mut parser = Parser::new(source, file_name);
    let result = parser
        .parse_expression()
        .and_then(|expr| parser.expect_end().map(|()| expr));
    if let Err(error) = &result {
        debug!(file = file_name, code = %error.code, "parse failed");
    }
    result
}

/// Parse a whole source file: comma-separated items up to end of file,
/// returned as a `Parenthesized` node.
pub fn parse_items(source: &str, file_name: &str) -> Result<Expr, ParseError> {
    Parser::new(source, file_name).parse_items()
}
