//! Token kinds for Llace.

use std::fmt;

/// Classification of a scanned token.
///
/// Besides real lexemes this covers the kinds produced by the scanner
/// decorators (`LeadingDocumentation`, `TrailingDocumentation`,
/// `SynthDocument`, `MultilineString`) and the four lexical error kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Eof,

    // Punctuation
    Ampersand,
    AmpersandAmpersand,
    Asterisk,
    Colon,
    Comma,
    Compare,
    CompareReversed,
    Dash,
    Dot,
    DotDot,
    Equals,
    EqualsEquals,
    EqualsEqualsEquals,
    Exclamation,
    GreaterThan,
    GreaterThanOrEquals,
    LeftBrace,
    LeftBracket,
    LeftParenthesis,
    LessThan,
    LessThanOrEquals,
    Matches,
    NotMatches,
    Plus,
    QuestionMark,
    QuestionMarkColon,
    RightArrow,
    RightBrace,
    RightBracket,
    RightParenthesis,
    Semicolon,
    Slash,
    VerticalBar,

    // Keywords
    And,
    As,
    In,
    Is,
    Not,
    Of,
    Or,
    To,

    // Literals
    BackTickedString,
    CharLiteral,
    DateLiteral,
    DateTimeLiteral,
    IntegerLiteral,
    IpAddressV4,
    IpAddressV6,
    MultilineString,
    StringLiteral,
    UuidLiteral,

    Identifier,

    // Documentation
    Documentation,
    LeadingDocumentation,
    TrailingDocumentation,
    SynthDocument,

    // Lexical errors
    UnclosedLiteral,
    UnclosedString,
    UnrecognizedChar,
    UnrecognizedLiteral,
}

impl TokenKind {
    /// Canonical surface text for punctuation and keywords; a bracketed
    /// description for every other kind.
    ///
    /// The scanner uses this as the text of punctuation tokens, and
    /// diagnostics use it to describe expected and found tokens.
    pub const fn text(self) -> &'static str {
        match self {
            TokenKind::Eof => "[end of file]",
            TokenKind::Ampersand => "&",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::Asterisk => "*",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Compare => "<=>",
            TokenKind::CompareReversed => ">=<",
            TokenKind::Dash => "-",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Equals => "=",
            TokenKind::EqualsEquals => "==",
            TokenKind::EqualsEqualsEquals => "===",
            TokenKind::Exclamation => "!",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterThanOrEquals => ">=",
            TokenKind::LeftBrace => "{",
            TokenKind::LeftBracket => "[",
            TokenKind::LeftParenthesis => "(",
            TokenKind::LessThan => "<",
            TokenKind::LessThanOrEquals => "<=",
            TokenKind::Matches => "=~",
            TokenKind::NotMatches => "!~",
            TokenKind::Plus => "+",
            TokenKind::QuestionMark => "?",
            TokenKind::QuestionMarkColon => "?:",
            TokenKind::RightArrow => "->",
            TokenKind::RightBrace => "}",
            TokenKind::RightBracket => "]",
            TokenKind::RightParenthesis => ")",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::VerticalBar => "|",
            TokenKind::And => "and",
            TokenKind::As => "as",
            TokenKind::In => "in",
            TokenKind::Is => "is",
            TokenKind::Not => "not",
            TokenKind::Of => "of",
            TokenKind::Or => "or",
            TokenKind::To => "to",
            TokenKind::BackTickedString => "[back-ticked string]",
            TokenKind::CharLiteral => "[character literal]",
            TokenKind::DateLiteral => "[date literal]",
            TokenKind::DateTimeLiteral => "[date-time literal]",
            TokenKind::IntegerLiteral => "[integer literal]",
            TokenKind::IpAddressV4 => "[IP address v4 literal]",
            TokenKind::IpAddressV6 => "[IP address v6 literal]",
            TokenKind::MultilineString => "[multiline string]",
            TokenKind::StringLiteral => "[string literal]",
            TokenKind::UuidLiteral => "[UUID literal]",
            TokenKind::Identifier => "[identifier]",
            TokenKind::Documentation => "[documentation]",
            TokenKind::LeadingDocumentation => "[leading documentation]",
            TokenKind::TrailingDocumentation => "[trailing documentation]",
            TokenKind::SynthDocument => "[synthetic documentation operator]",
            TokenKind::UnclosedLiteral => "[error - literal extends past end of line]",
            TokenKind::UnclosedString => "[error - string extends past end of line]",
            TokenKind::UnrecognizedChar => "[error - unrecognized character]",
            TokenKind::UnrecognizedLiteral => "[error - unrecognized literal]",
        }
    }

    /// True for the four lexical error kinds.
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::UnclosedLiteral
                | TokenKind::UnclosedString
                | TokenKind::UnrecognizedChar
                | TokenKind::UnrecognizedLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
