use pretty_assertions::assert_eq;

use super::*;
use crate::Scanner;

fn stream(source: &str) -> Vec<(TokenKind, String)> {
    let mut scanner = DocumentationScanner::new(Scanner::new(source, "test.llace"));
    let mut tokens = Vec::new();
    loop {
        let token = scanner.read_token();
        if token.kind == TokenKind::Eof {
            return tokens;
        }
        tokens.push((token.kind, token.text));
    }
}

fn kinds(source: &str) -> Vec<TokenKind> {
    stream(source).into_iter().map(|(kind, _)| kind).collect()
}

#[test]
fn plain_tokens_pass_through() {
    use TokenKind::*;
    assert_eq!(kinds("a + b"), vec![Identifier, Plus, Identifier]);
}

#[test]
fn leading_documentation_at_start_of_input() {
    let tokens = stream("// first\n// second\nx");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::LeadingDocumentation, "// first\n// second".to_string()),
            (TokenKind::SynthDocument, " ".to_string()),
            (TokenKind::Identifier, "x".to_string()),
        ]
    );
}

#[test]
fn three_consecutive_lines_merge() {
    let tokens = stream("a,\n// one\n// two\n// three\nb");
    assert_eq!(tokens[2].0, TokenKind::LeadingDocumentation);
    assert_eq!(tokens[2].1, "// one\n// two\n// three");
    assert_eq!(tokens[3].0, TokenKind::SynthDocument);
    assert_eq!(tokens[4].1, "b");
}

#[test]
fn separated_comment_blocks_stay_separate() {
    use TokenKind::*;
    assert_eq!(
        kinds("// a\n\n// b\nx"),
        vec![LeadingDocumentation, SynthDocument, LeadingDocumentation, SynthDocument, Identifier]
    );
}

#[test]
fn trailing_documentation_after_code() {
    use TokenKind::*;
    assert_eq!(
        kinds("x  // note\n)"),
        vec![Identifier, SynthDocument, TrailingDocumentation, RightParenthesis]
    );
}

#[test]
fn trailing_documentation_moves_before_comma() {
    use TokenKind::*;
    assert_eq!(
        kinds("x,  // note\ny"),
        vec![Identifier, SynthDocument, TrailingDocumentation, Comma, Identifier]
    );
}

#[test]
fn trailing_documentation_moves_before_semicolon() {
    use TokenKind::*;
    assert_eq!(
        kinds("x;  // note"),
        vec![Identifier, SynthDocument, TrailingDocumentation, Semicolon]
    );
}

#[test]
fn documentation_after_vertical_bar_stays_leading() {
    use TokenKind::*;
    assert_eq!(
        kinds("| // note\nA"),
        vec![VerticalBar, LeadingDocumentation, SynthDocument, Identifier]
    );
}

#[test]
fn trailing_documentation_continues_on_next_line() {
    let tokens = stream("x,  // one\n    // two\ny");
    assert_eq!(
        tokens[2],
        (TokenKind::TrailingDocumentation, "// one\n// two".to_string())
    );
}

#[test]
fn at_eof_only_when_drained() {
    let mut scanner = DocumentationScanner::new(Scanner::new("x", "test.llace"));
    assert!(!scanner.is_at_eof());
    assert_eq!(scanner.read_token().kind, TokenKind::Identifier);
    assert_eq!(scanner.read_token().kind, TokenKind::Eof);
    assert!(scanner.is_at_eof());
}
