//! S-expression dumps of expression trees.
//!
//! A compact, origin-free rendering used to assert tree shape in tests and
//! diagnostics: `a - b + 3` dumps as `(+ (- (identifier a) (identifier b)) (intliteral 3))`.

use llace_stack::ensure_sufficient_stack;

use super::{Expr, ExprKind};

impl Expr {
    pub fn to_s_expression(&self) -> String {
        let mut out = String::new();
        write_s_expression(&mut out, self);
        out
    }
}

fn write_s_expression(out: &mut String, expr: &Expr) {
    ensure_sufficient_stack(|| write_node(out, expr));
}

fn write_node(out: &mut String, expr: &Expr) {
    match expr.kind() {
        ExprKind::ArrayLiteral(elements) => write_list(out, "arrayliteral", elements),
        ExprKind::ArrayType(item) => write_wrapped(out, "arraytype", &[item.as_ref()]),
        ExprKind::CharLiteral(text) => write_leaf(out, "charliteral", text),
        ExprKind::DateLiteral(text) => write_leaf(out, "dateliteral", text),
        ExprKind::DateTimeLiteral(text) => write_leaf(out, "datetimeliteral", text),
        ExprKind::FunctionCall { callee, arguments } => {
            write_wrapped(out, "call", &[callee.as_ref(), arguments.as_ref()]);
        }
        ExprKind::Identifier(name) => write_leaf(out, "identifier", name),
        ExprKind::Infix { op, operands } => write_list(out, op.symbol(), operands),
        ExprKind::IntegerLiteral(text) => write_leaf(out, "intliteral", text),
        ExprKind::LeadingDocumentation(_) => out.push_str("(leadingdoc)"),
        ExprKind::ListType(item) => write_wrapped(out, "listtype", &[item.as_ref()]),
        ExprKind::MapType { item, key } => write_wrapped(out, "maptype", &[item.as_ref(), key.as_ref()]),
        ExprKind::MultilineString(_) => out.push_str("(multilinestring)"),
        ExprKind::Optional(inner) => write_wrapped(out, "optional", &[inner.as_ref()]),
        ExprKind::Parenthesized(items) => {
            out.push_str("(parenthesized ");
            write_items(out, items);
            out.push(')');
        }
        ExprKind::Prefix { op, operand } => write_wrapped(out, op.symbol(), &[operand.as_ref()]),
        ExprKind::SetType(item) => write_wrapped(out, "settype", &[item.as_ref()]),
        ExprKind::StringLiteral(text) => write_leaf(out, "stringliteral", text),
        ExprKind::TrailingDocumentation(_) => out.push_str("(trailingdoc)"),
        ExprKind::UuidLiteral(text) => write_leaf(out, "uuidliteral", text),
    }
}

fn write_leaf(out: &mut String, tag: &str, text: &str) {
    out.push('(');
    out.push_str(tag);
    out.push(' ');
    out.push_str(text);
    out.push(')');
}

fn write_wrapped(out: &mut String, tag: &str, children: &[&Expr]) {
    out.push('(');
    out.push_str(tag);
    for child in children {
        out.push(' ');
        write_s_expression(out, child);
    }
    out.push(')');
}

fn write_list(out: &mut String, tag: &str, items: &[Expr]) {
    out.push('(');
    out.push_str(tag);
    out.push(' ');
    write_items(out, items);
    out.push(')');
}

fn write_items(out: &mut String, items: &[Expr]) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        write_s_expression(out, item);
    }
}
