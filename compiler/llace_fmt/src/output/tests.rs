use pretty_assertions::assert_eq;

use super::*;

fn finish(f: impl FnOnce(&mut OutputBuilder)) -> String {
    let mut output = OutputBuilder::new();
    f(&mut output);
    output.into_output()
}

#[test]
fn output_ends_with_exactly_one_line_break() {
    assert_eq!(finish(|out| out.append("x")), "x\n");
    assert_eq!(finish(|out| out.append("x\n\n\n")), "x\n");
    assert_eq!(finish(|_| {}), "\n");
}

#[test]
fn trailing_whitespace_is_stripped_per_line() {
    assert_eq!(finish(|out| out.append("a,   \nb  ")), "a,\nb\n");
}

#[test]
fn conditional_line_break() {
    let text = finish(|out| {
        out.append("a");
        out.append_new_line_if(false);
        out.append("b");
        out.append_new_line_if(true);
        out.append("c");
    });
    assert_eq!(text, "ab\nc\n");
}

#[test]
fn new_lines_start_at_indentation() {
    let text = finish(|out| {
        out.append("(");
        out.indented(|out| {
            out.append_new_line();
            out.append("a\nb");
            out.append_new_line();
        });
        out.append(")");
    });
    assert_eq!(text, "(\n    a\n    b\n)\n");
}

#[test]
fn leading_whitespace_of_a_new_line_is_replaced_by_indentation() {
    let text = finish(|out| {
        out.indented(|out| out.append("   | x"));
    });
    assert_eq!(text, "    | x\n");
}

#[test]
fn configured_indent_width() {
    let mut out = OutputBuilder::with_config(FormatConfig::with_indent_width(2));
    out.indented(|out| out.indented(|out| out.append("x")));
    assert_eq!(out.into_output(), "    x\n");
}

#[test]
fn indented_if_only_indents_when_asked() {
    let text = finish(|out| {
        out.indented_if(false, |out| {
            out.append("a");
            out.append_new_line();
        });
        out.indented_if(true, |out| out.append("b"));
    });
    assert_eq!(text, "a\n    b\n");
}

#[test]
fn unindent_discards_whitespace_only_line() {
    let mut out = OutputBuilder::new();
    out.append("x");
    out.append_new_line();
    out.indented(|out| out.append("   "));
    out.append("y");
    assert_eq!(out.into_output(), "x\ny\n");
}

#[test]
fn vertical_spacing_modes() {
    let text = finish(|out| {
        out.append("a");
        out.append_vertical_spacing();
        out.append("b");
        out.vertically_spaced(VerticalSpacing::MultipleLines, |out| {
            out.append_vertical_spacing();
            out.append("c");
            out.vertically_spaced(VerticalSpacing::Whitespace, |out| {
                out.append_vertical_spacing();
                out.append("d");
            });
        });
        out.append_vertical_spacing();
        out.append("e");
    });
    assert_eq!(text, "ab\nc\n\nde\n");
}

#[test]
fn multiple_lines_does_not_break_an_empty_line() {
    let text = finish(|out| {
        out.vertically_spaced(VerticalSpacing::MultipleLines, |out| {
            out.append_vertical_spacing();
            out.append("a");
            out.append_new_line();
            out.append_vertical_spacing();
            out.append("b");
        });
    });
    assert_eq!(text, "a\nb\n");
}

#[test]
fn spacing_mode_is_restored() {
    let mut out = OutputBuilder::new();
    out.vertically_spaced(VerticalSpacing::Whitespace, |out| {
        assert_eq!(out.vertical_spacing(), VerticalSpacing::Whitespace);
        out.vertically_spaced(VerticalSpacing::None, |out| {
            assert_eq!(out.vertical_spacing(), VerticalSpacing::None);
        });
        assert_eq!(out.vertical_spacing(), VerticalSpacing::Whitespace);
    });
    assert_eq!(out.vertical_spacing(), VerticalSpacing::None);
}

#[test]
fn indented_if_vertically_spaced_follows_mode() {
    let text = finish(|out| {
        out.indented_if_vertically_spaced(|out| {
            out.append("a");
            out.append_new_line();
        });
        out.vertically_spaced(VerticalSpacing::MultipleLines, |out| {
            out.indented_if_vertically_spaced(|out| out.append("b"));
        });
    });
    assert_eq!(text, "a\n    b\n");
}

#[test]
fn trailing_documentation_follows_the_code() {
    let text = finish(|out| {
        out.append("a: 1,");
        out.set_trailing_documentation(vec!["  // one".into()]);
        out.append_new_line();
        out.append("b: 2");
    });
    assert_eq!(text, "a: 1,  // one\nb: 2\n");
}

#[test]
fn trailing_documentation_continuation_is_aligned() {
    let text = finish(|out| {
        out.append("size: int,");
        out.set_trailing_documentation(vec!["  // The size,".into(), "  // in pixels.".into()]);
        out.append_new_line();
    });
    assert_eq!(text, "size: int,  // The size,\n            // in pixels.\n");
}

#[test]
fn pending_trailing_documentation_is_flushed_at_end() {
    let text = finish(|out| {
        out.append("x");
        out.set_trailing_documentation(vec!["  // last".into()]);
    });
    assert_eq!(text, "x  // last\n");
}

#[test]
fn aligned_to_current_column() {
    let text = finish(|out| {
        out.indented(|out| {
            out.append("text: ");
            out.indented_to_current_column(|out| {
                out.append("`one");
                out.append_new_line();
                out.append("`two");
                out.append_new_line();
            });
            out.append("x");
        });
    });
    assert_eq!(text, "    text: `one\n          `two\n    x\n");
}

#[test]
fn aligned_on_empty_line_keeps_indentation() {
    let text = finish(|out| {
        out.indented(|out| {
            out.indented_to_current_column(|out| {
                out.append("`one");
                out.append_new_line();
                out.append("`two");
            });
        });
    });
    assert_eq!(text, "    `one\n    `two\n");
}
