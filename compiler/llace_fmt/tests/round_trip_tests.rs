//! Round-trip tests: canonically laid out source parses and writes back to
//! exactly the same text.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use llace_fmt::{format_expr, format_items};
use llace_parse::{parse_expression, parse_items};
use pretty_assertions::assert_eq;

#[track_caller]
fn assert_round_trip(code: &str) {
    let expr = parse_expression(code, "round_trip.llace")
        .unwrap_or_else(|e| panic!("failed to parse {code:?}: {e}"));
    assert_eq!(format_expr(&expr), format!("{code}\n"), "round trip of {code:?}");
}

#[track_caller]
fn assert_items_round_trip(code: &str) {
    let items = parse_items(code, "round_trip.llace")
        .unwrap_or_else(|e| panic!("failed to parse {code:?}: {e}"));
    assert_eq!(format_items(&items), code, "round trip of {code:?}");
}

#[test]
fn literals() {
    for code in [
        "1",
        "x",
        "\"s\"",
        "'c'",
        "'abcdef01-1234-abcd-CDEF-1234567890Ab'",
        "'2023-06-15'",
        "'2023-06-15T10:30Z'",
        "'2023-06-15T10:30:45.123-05:00'",
    ] {
        assert_round_trip(code);
    }
}

#[test]
fn arithmetic() {
    for code in [
        "a - b + 3",
        "a + b + 3",
        "x + 3 * g",
        "a + b / 2 - c",
        "-a",
        "-2 * a - b * -r",
        "a.b.c",
        "x.y + z.q",
    ] {
        assert_round_trip(code);
    }
}

#[test]
fn parentheses() {
    for code in [
        "(x + 5)",
        "((x + 5) / 3)",
        "()",
        "(x: int && 5)",
        "(x: int && 5, y: string && \"s\")",
        "[1, 2, 3]",
        "[]",
    ] {
        assert_round_trip(code);
    }
}

#[test]
fn logic_and_comparison() {
    for code in [
        "a and b or c",
        "a and not b",
        "not a or b",
        "x == y",
        "x > y",
        "x >= y",
        "x < y",
        "x <= y",
        "1 <=> 2",
        "1 >=< 2",
        "x =~ y",
        "x !~ y",
    ] {
        assert_round_trip(code);
    }
}

#[test]
fn calls_ranges_and_membership() {
    for code in [
        "f(x: 0)",
        "(a: f(x: 0))",
        "f()",
        "1..9",
        "x in 1..9",
        "x is Widget",
        "x = 1",
        "x ?: 1",
    ] {
        assert_round_trip(code);
    }
}

#[test]
fn types() {
    for code in [
        "Wild & Free",
        "Boring | Wild & Free",
        "Wild & Free | Boring",
        "int -> string",
        "Q?",
        "Q? | P",
        "Q | P?",
        "string[]",
        "string[][]",
        "string[;]",
        "string[][;]",
        "string{}",
        "string{int}",
    ] {
        assert_round_trip(code);
    }
}

#[test]
fn multi_line_layouts() {
    for code in [
        "(\n    a: 1,\n    b: 2,\n    c: 3\n)",
        "x:\n    string\n    | number\n    | boolean",
        "(\n    a: 1,  // note\n    b: 2\n)",
        "(\n\n    // doc\n    a: 1,\n\n    b: 2\n\n)",
        "// about x\nx",
        "text: `one\n      `two",
        "f(\n    a: 1,\n    b: 2,\n    c: 3\n)",
    ] {
        assert_round_trip(code);
    }
}

#[test]
fn items() {
    for code in [
        "a: 1, b: 2\n",
        "a: 1,\nb: 2,\nc: 3\n",
        "\n",
        "// The name.\nname: string,\n\n// The size.\nsize: int\n",
    ] {
        assert_items_round_trip(code);
    }
}

#[test]
fn writing_normalizes_layout() {
    let expr = parse_expression("(  a:1 ,b :  2 )", "normalize.llace").unwrap();
    assert_eq!(format_expr(&expr), "(a: 1, b: 2)\n");

    let expr = parse_expression("x:string|number|boolean", "normalize.llace").unwrap();
    assert_eq!(format_expr(&expr), "x:\n    string\n    | number\n    | boolean\n");
}
