//! Deeply nested source through the whole pipeline: parse, write, clone,
//! compare, dump and drop must all survive inputs far deeper than the
//! native stack allows for plain recursion.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use llace_fmt::format_expr;
use llace_parse::parse_expression;
use pretty_assertions::assert_eq;

const DEPTH: usize = 10_000;

fn nested(open: &str, inner: &str, close: &str) -> String {
    format!("{}{inner}{}", open.repeat(DEPTH), close.repeat(DEPTH))
}

#[test]
fn nested_parentheses_survive_every_tree_operation() {
    let code = nested("(", "x", ")");
    let expr = parse_expression(&code, "deep.llace").unwrap();

    assert_eq!(format_expr(&expr), format!("{code}\n"));

    let copy = expr.clone();
    assert!(copy == expr);

    let dump = copy.to_s_expression();
    assert_eq!(dump.matches("(parenthesized ").count(), DEPTH);

    drop(copy);
    drop(expr);
}

#[test]
fn nested_calls_write_back_unchanged() {
    let code = nested("f(", "x", ")");
    let expr = parse_expression(&code, "deep.llace").unwrap();
    assert_eq!(format_expr(&expr), format!("{code}\n"));
}

#[test]
fn nested_prefix_operators_write_back_unchanged() {
    let code = nested("not ", "x", "");
    let expr = parse_expression(&code, "deep.llace").unwrap();
    assert_eq!(format_expr(&expr), format!("{code}\n"));
    assert!(expr.clone() == expr);
}
