//! Expression tree.
//!
//! Every node owns its children and carries the [`Origin`] of the token it
//! was built from. Nodes have no setters; the only way to change a tree is
//! to take it apart with [`Expr::into_parts`] and build a new one.

mod operators;
mod sexpr;

pub use operators::{BinaryOp, UnaryOp};

use std::{fmt, mem};

use llace_stack::ensure_sufficient_stack;

use crate::Origin;

/// Expression node.
///
/// Equality compares structure and text only; origins are ignored.
///
/// Cloning, comparing and dropping are all safe on arbitrarily deep trees.
pub struct Expr {
    kind: ExprKind,
    origin: Origin,
}

/// Expression variants.
///
/// Literal variants keep their exact source text, quotes included, so the
/// formatter can write them back unchanged.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// `[a, b, c]`
    ArrayLiteral(Vec<Expr>),

    /// `T[]`
    ArrayType(Box<Expr>),

    /// `'c'`
    CharLiteral(String),

    /// `'2023-01-01'`
    DateLiteral(String),

    /// `'2023-01-01T12:00:00Z'`
    DateTimeLiteral(String),

    /// `f(x: 0)`. `arguments` is always a `Parenthesized` node.
    FunctionCall {
        callee: Box<Expr>,
        arguments: Box<Expr>,
    },

    Identifier(String),

    /// Two or more operands joined by the same operator.
    Infix { op: BinaryOp, operands: Vec<Expr> },

    IntegerLiteral(String),

    /// Comment lines written above the expression they document.
    LeadingDocumentation(Vec<String>),

    /// `T[;]`
    ListType(Box<Expr>),

    /// `T{K}`
    MapType { item: Box<Expr>, key: Box<Expr> },

    /// Consecutive back-ticked lines, each still starting with its backtick.
    MultilineString(Vec<String>),

    /// `T?`
    Optional(Box<Expr>),

    /// `(a, b)`. Also the argument list of a call and the item list of a
    /// whole source file.
    Parenthesized(Vec<Expr>),

    Prefix { op: UnaryOp, operand: Box<Expr> },

    /// `T{}`
    SetType(Box<Expr>),

    /// `"text"`
    StringLiteral(String),

    /// Comment lines written after code on the same line.
    TrailingDocumentation(Vec<String>),

    /// `'abcdef01-1234-abcd-CDEF-1234567890Ab'`
    UuidLiteral(String),
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, origin: Origin) -> Self {
        Expr { kind, origin }
    }

    #[inline]
    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    #[inline]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn into_parts(mut self) -> (ExprKind, Origin) {
        let kind = mem::replace(&mut self.kind, ExprKind::Parenthesized(Vec::new()));
        (kind, self.origin.clone())
    }

    /// Direct children in source order.
    ///
    /// This is the complete set of child expressions of every variant; the
    /// formatter's layout rules rely on nothing else.
    pub fn sub_expressions(&self) -> Vec<&Expr> {
        match &self.kind {
            ExprKind::ArrayLiteral(items)
            | ExprKind::Parenthesized(items)
            | ExprKind::Infix {
                operands: items, ..
            } => items.iter().collect(),
            ExprKind::ArrayType(item)
            | ExprKind::ListType(item)
            | ExprKind::Optional(item)
            | ExprKind::SetType(item)
            | ExprKind::Prefix { operand: item, .. } => vec![item.as_ref()],
            ExprKind::FunctionCall { callee, arguments } => vec![callee.as_ref(), arguments.as_ref()],
            ExprKind::MapType { item, key } => vec![item.as_ref(), key.as_ref()],
            ExprKind::CharLiteral(_)
            | ExprKind::DateLiteral(_)
            | ExprKind::DateTimeLiteral(_)
            | ExprKind::Identifier(_)
            | ExprKind::IntegerLiteral(_)
            | ExprKind::LeadingDocumentation(_)
            | ExprKind::MultilineString(_)
            | ExprKind::StringLiteral(_)
            | ExprKind::TrailingDocumentation(_)
            | ExprKind::UuidLiteral(_) => Vec::new(),
        }
    }

    #[inline]
    pub fn is_leading_documentation(&self) -> bool {
        matches!(self.kind, ExprKind::LeadingDocumentation(_))
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Expr {
            kind: self.kind.clone(),
            origin: self.origin.clone(),
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.kind == other.kind)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| write!(f, "{:?} @ {:?}", self.kind, self.origin))
    }
}

/// Children are detached onto a worklist so dropping never recurses.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(&mut self.kind, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr.kind, &mut pending);
        }
    }
}

fn detach_children(kind: &mut ExprKind, pending: &mut Vec<Expr>) {
    match mem::replace(kind, ExprKind::Parenthesized(Vec::new())) {
        ExprKind::ArrayLiteral(items)
        | ExprKind::Parenthesized(items)
        | ExprKind::Infix {
            operands: items, ..
        } => pending.extend(items),
        ExprKind::ArrayType(item)
        | ExprKind::ListType(item)
        | ExprKind::Optional(item)
        | ExprKind::SetType(item)
        | ExprKind::Prefix { operand: item, .. } => pending.push(*item),
        ExprKind::FunctionCall { callee, arguments } => {
            pending.push(*callee);
            pending.push(*arguments);
        }
        ExprKind::MapType { item, key } => {
            pending.push(*item);
            pending.push(*key);
        }
        ExprKind::CharLiteral(_)
        | ExprKind::DateLiteral(_)
        | ExprKind::DateTimeLiteral(_)
        | ExprKind::Identifier(_)
        | ExprKind::IntegerLiteral(_)
        | ExprKind::LeadingDocumentation(_)
        | ExprKind::MultilineString(_)
        | ExprKind::StringLiteral(_)
        | ExprKind::TrailingDocumentation(_)
        | ExprKind::UuidLiteral(_) => {}
    }
}
