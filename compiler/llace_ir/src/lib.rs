//! Llace IR - shared data types of the Llace front end.
//!
//! - [`Origin`]: where a token or node came from
//! - [`Token`] and [`TokenKind`]: scanner output
//! - [`Expr`] and [`ExprKind`]: the expression tree built by the parser
//!   and rendered back to source by the formatter
//!
//! Everything here is immutable once constructed. Tree nodes own their
//! children, so no node is shared between two trees.

pub mod ast;
mod origin;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use origin::Origin;
pub use token::{Token, TokenKind};
