use super::*;

#[test]
fn tracks_lines_and_columns() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.position().column, 3);
    cursor.bump();
    let position = cursor.position();
    assert_eq!((position.line, position.column, position.offset), (2, 1, 3));
}

#[test]
fn bump_at_end_is_none() {
    let mut cursor = Cursor::new("x");
    assert_eq!(cursor.bump(), Some('x'));
    assert_eq!(cursor.bump(), None);
    assert_eq!(cursor.bump(), None);
}

#[test]
fn columns_count_characters_not_bytes() {
    let mut cursor = Cursor::new("é!");
    cursor.bump();
    assert_eq!(cursor.position().column, 2);
    assert_eq!(cursor.position().offset, 2);
}

#[test]
fn eat_to_line_end_stops_before_break() {
    let mut cursor = Cursor::new("// note\r\nnext");
    cursor.eat_to_line_end();
    assert_eq!(cursor.slice_from(0), "// note");
    assert_eq!(cursor.peek(), Some('\r'));
    assert_eq!(cursor.position().column, 8);
}

#[test]
fn eat_to_line_end_at_end_of_input() {
    let mut cursor = Cursor::new("`text");
    cursor.eat_to_line_end();
    assert_eq!(cursor.rest(), "");
}

#[test]
fn text_at_respects_bounds() {
    let cursor = Cursor::new("<=");
    assert_eq!(cursor.text_at(0, 2), Some("<="));
    assert_eq!(cursor.text_at(0, 3), None);
}
