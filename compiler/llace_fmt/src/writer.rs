//! Expression Writer
//!
//! Renders an expression tree as Llace source through an [`OutputBuilder`].
//!
//! Layout is decided per grouping (parenthesized items, union operands) by
//! [`item_spacing`], which looks only at the shape of the tree. Source laid
//! out the way the writer lays it out therefore parses and writes back to
//! the same text.

use std::marker::PhantomData;
use std::ptr;

use llace_ir::{BinaryOp, Expr, ExprKind};
use llace_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::output::{OutputBuilder, VerticalSpacing};

/// Spacing for the groupings inside `expr`.
///
/// Three or more direct children break lines, as does any documentation
/// attached by a document node. Leading documentation anywhere below asks
/// for blank lines, which win over everything else.
pub fn item_spacing(expr: &Expr) -> VerticalSpacing {
    ExpressionWriter::new().spacing(expr)
}

/// Writes expressions through an [`OutputBuilder`].
///
/// Spacing is computed bottom-up once per node and cached for the lifetime
/// of the writer, which borrows the tree it writes.
#[derive(Debug, Default)]
pub struct ExpressionWriter<'a> {
    spacing: FxHashMap<*const Expr, VerticalSpacing>,
    tree: PhantomData<&'a Expr>,
}

impl<'a> ExpressionWriter<'a> {
    pub fn new() -> Self {
        ExpressionWriter {
            spacing: FxHashMap::default(),
            tree: PhantomData,
        }
    }

    pub fn write_expr(&mut self, out: &mut OutputBuilder, expr: &'a Expr) {
        ensure_sufficient_stack(|| self.write_expr_inner(out, expr));
    }

    /// Write the items of a whole source file: a `Parenthesized` node whose
    /// parentheses are implicit. Any other node is written as a single item.
    pub fn write_unparenthesized_items(&mut self, out: &mut OutputBuilder, expr: &'a Expr) {
        let items = items_of(expr);
        let spacing = self.spacing(expr);
        out.vertically_spaced(spacing, |out| {
            self.write_comma_separated(out, items);
        });
    }

    // ─── Spacing ───

    fn spacing(&mut self, expr: &'a Expr) -> VerticalSpacing {
        let key = ptr::from_ref(expr);
        if let Some(&cached) = self.spacing.get(&key) {
            return cached;
        }
        let spacing = ensure_sufficient_stack(|| self.calculate_spacing(expr));
        self.spacing.insert(key, spacing);
        spacing
    }

    fn calculate_spacing(&mut self, expr: &'a Expr) -> VerticalSpacing {
        let items = expr.sub_expressions();
        let mut result = if items.len() > 2 {
            VerticalSpacing::MultipleLines
        } else {
            VerticalSpacing::None
        };

        if let ExprKind::Infix {
            op: BinaryOp::Document,
            operands,
        } = expr.kind()
        {
            if operands.first().is_some_and(Expr::is_leading_documentation) {
                return VerticalSpacing::Whitespace;
            }
            result = VerticalSpacing::MultipleLines;
        }

        for item in items {
            match self.spacing(item) {
                VerticalSpacing::Whitespace => return VerticalSpacing::Whitespace,
                VerticalSpacing::MultipleLines => result = VerticalSpacing::MultipleLines,
                VerticalSpacing::None => {}
            }
        }

        result
    }

    // ─── Rendering ───

    fn write_expr_inner(&mut self, out: &mut OutputBuilder, expr: &'a Expr) {
        match expr.kind() {
            ExprKind::CharLiteral(text)
            | ExprKind::DateLiteral(text)
            | ExprKind::DateTimeLiteral(text)
            | ExprKind::Identifier(text)
            | ExprKind::IntegerLiteral(text)
            | ExprKind::StringLiteral(text)
            | ExprKind::UuidLiteral(text) => out.append(text),

            ExprKind::ArrayLiteral(elements) => {
                out.append("[");
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        out.append(", ");
                    }
                    self.write_expr(out, element);
                }
                out.append("]");
            }

            ExprKind::ArrayType(item) => self.write_suffixed(out, item, "[]"),
            ExprKind::ListType(item) => self.write_suffixed(out, item, "[;]"),
            ExprKind::SetType(item) => self.write_suffixed(out, item, "{}"),
            ExprKind::Optional(item) => self.write_suffixed(out, item, "?"),
            ExprKind::MapType { item, key } => {
                self.write_expr(out, item);
                out.append("{");
                self.write_expr(out, key);
                out.append("}");
            }

            ExprKind::FunctionCall { callee, arguments } => {
                self.write_expr(out, callee);
                self.write_parenthesized(out, arguments);
            }
            ExprKind::Parenthesized(_) => self.write_parenthesized(out, expr),

            ExprKind::Infix {
                op: BinaryOp::Union,
                operands,
            } => self.write_union(out, expr, operands),
            ExprKind::Infix {
                op: BinaryOp::Document,
                operands,
            } => {
                for operand in operands {
                    self.write_expr(out, operand);
                }
            }
            ExprKind::Infix { op, operands } => {
                let mut operands = operands.iter();
                if let Some(first) = operands.next() {
                    self.write_expr(out, first);
                }
                for operand in operands {
                    out.append(op.text());
                    self.write_expr(out, operand);
                }
            }
            ExprKind::Prefix { op, operand } => {
                out.append(op.text());
                self.write_expr(out, operand);
            }

            ExprKind::LeadingDocumentation(lines) => {
                for line in lines {
                    out.append(line);
                    out.append_new_line();
                }
            }
            ExprKind::TrailingDocumentation(lines) => {
                out.set_trailing_documentation(lines.iter().map(|line| format!("  {line}")).collect());
            }
            ExprKind::MultilineString(lines) => out.indented_to_current_column(|out| {
                for line in lines {
                    out.append(line);
                    out.append_new_line();
                }
            }),
        }
    }

    fn write_suffixed(&mut self, out: &mut OutputBuilder, item: &'a Expr, suffix: &str) {
        self.write_expr(out, item);
        out.append(suffix);
    }

    fn write_parenthesized(&mut self, out: &mut OutputBuilder, expr: &'a Expr) {
        let items = items_of(expr);
        let spacing = self.spacing(expr);
        out.append("(");
        out.vertically_spaced(spacing, |out| {
            out.append_vertical_spacing();
            out.indented_if_vertically_spaced(|out| self.write_comma_separated(out, items));
        });
        out.append(")");
    }

    /// Items joined by `, `, each followed by the current vertical spacing.
    fn write_comma_separated(&mut self, out: &mut OutputBuilder, items: &'a [Expr]) {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                out.append(", ");
                out.append_vertical_spacing();
            }
            self.write_expr(out, item);
        }
        out.append_vertical_spacing();
    }

    /// One operand per line when spaced, each after the first led by `|`.
    fn write_union(&mut self, out: &mut OutputBuilder, expr: &'a Expr, operands: &'a [Expr]) {
        let spacing = self.spacing(expr);
        out.vertically_spaced(spacing, |out| {
            for (index, operand) in operands.iter().enumerate() {
                out.append_vertical_spacing();
                out.indented_if_vertically_spaced(|out| {
                    if index > 0 {
                        out.append(" | ");
                    }
                    self.write_expr(out, operand);
                });
            }
        });
    }
}

fn items_of(expr: &Expr) -> &[Expr] {
    match expr.kind() {
        ExprKind::Parenthesized(items) => items,
        _ => std::slice::from_ref(expr),
    }
}
