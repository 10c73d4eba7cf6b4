//! Keyword resolution.
//!
//! Every keyword is two or three ASCII letters, so the identifier length is
//! checked before any comparison.

use llace_ir::TokenKind;

/// Look up a keyword by text. `None` means the text is an identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "as" => Some(TokenKind::As),
            "in" => Some(TokenKind::In),
            "is" => Some(TokenKind::Is),
            "of" => Some(TokenKind::Of),
            "or" => Some(TokenKind::Or),
            "to" => Some(TokenKind::To),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "not" => Some(TokenKind::Not),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_keywords() {
        assert_eq!(lookup("and"), Some(TokenKind::And));
        assert_eq!(lookup("is"), Some(TokenKind::Is));
        assert_eq!(lookup("to"), Some(TokenKind::To));
    }

    #[test]
    fn near_misses_are_identifiers() {
        assert_eq!(lookup("an"), None);
        assert_eq!(lookup("And"), None);
        assert_eq!(lookup("island"), None);
        assert_eq!(lookup(""), None);
    }
}
