//! Punctuation tables, tried longest first.

use llace_ir::TokenKind;

pub(crate) fn three_char(text: &str) -> Option<TokenKind> {
    match text {
        "===" => Some(TokenKind::EqualsEqualsEquals),
        ">=<" => Some(TokenKind::CompareReversed),
        "<=>" => Some(TokenKind::Compare),
        _ => None,
    }
}

/// `//` maps to [`TokenKind::Documentation`]; the scanner then reads on to
/// the end of the line.
pub(crate) fn two_char(text: &str) -> Option<TokenKind> {
    match text {
        "&&" => Some(TokenKind::AmpersandAmpersand),
        "//" => Some(TokenKind::Documentation),
        ".." => Some(TokenKind::DotDot),
        "==" => Some(TokenKind::EqualsEquals),
        ">=" => Some(TokenKind::GreaterThanOrEquals),
        "<=" => Some(TokenKind::LessThanOrEquals),
        "=~" => Some(TokenKind::Matches),
        "!~" => Some(TokenKind::NotMatches),
        "?:" => Some(TokenKind::QuestionMarkColon),
        "->" => Some(TokenKind::RightArrow),
        _ => None,
    }
}

pub(crate) fn one_char(ch: char) -> Option<TokenKind> {
    match ch {
        '&' => Some(TokenKind::Ampersand),
        '*' => Some(TokenKind::Asterisk),
        ':' => Some(TokenKind::Colon),
        ',' => Some(TokenKind::Comma),
        '-' => Some(TokenKind::Dash),
        '.' => Some(TokenKind::Dot),
        '=' => Some(TokenKind::Equals),
        '!' => Some(TokenKind::Exclamation),
        '>' => Some(TokenKind::GreaterThan),
        '{' => Some(TokenKind::LeftBrace),
        '[' => Some(TokenKind::LeftBracket),
        '(' => Some(TokenKind::LeftParenthesis),
        '<' => Some(TokenKind::LessThan),
        '+' => Some(TokenKind::Plus),
        '?' => Some(TokenKind::QuestionMark),
        '}' => Some(TokenKind::RightBrace),
        ']' => Some(TokenKind::RightBracket),
        ')' => Some(TokenKind::RightParenthesis),
        '/' => Some(TokenKind::Slash),
        ';' => Some(TokenKind::Semicolon),
        '|' => Some(TokenKind::VerticalBar),
        _ => None,
    }
}
