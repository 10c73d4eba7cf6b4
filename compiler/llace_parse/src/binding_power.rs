//! Binding powers of operator tokens.
//!
//! Infix powers come in `(left, right)` pairs. A right power above the left
//! one makes an operator left-associative; the parser then folds repeated
//! applications into one n-ary node. Postfix forms bind tighter than every
//! infix operator.
//!
//! | Level | Operators | Powers |
//! |-------|-----------|--------|
//! | qualify, assign, default | `:` `=` `?:` | 10/20 |
//! | low-precedence intersect | `&&` | 30/40 |
//! | union | `\|` | 50/60 |
//! | intersect | `&` | 70/80 |
//! | documentation | synthetic | 90/100 |
//! | logical or | `or` | 110/120 |
//! | logical and | `and` | 130/140 |
//! | logical not | `not` | 150 (prefix) |
//! | ordering | `<=>` `>=<` | 170/180 |
//! | comparison | `==` `>` `>=` `<` `<=` | 190/200 |
//! | membership, matching | `in` `is` `=~` `!~` | 210/220 |
//! | additive | `+` `-` | 230/240 |
//! | range | `..` | 235/236 |
//! | multiplicative | `*` `/` | 250/260 |
//! | negation | `-` | 270 (prefix) |
//! | function arrow | `->` | 290/300 |
//! | field reference | `.` | 310/320 |
//! | postfix | `{` `[` `(` `?` | 500 |

use llace_ir::{BinaryOp, TokenKind, UnaryOp};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InfixPower {
    pub left: u16,
    pub right: u16,
    pub op: BinaryOp,
}

/// Postfix forms, distinguished by their opening token.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Postfix {
    /// `{}` or `{key}`
    Brace,
    /// `[]` or `[;]`
    Bracket,
    /// `(args)`
    Call,
    /// `?`
    Optional,
}

const POSTFIX_POWER: u16 = 500;

const fn power(left: u16, right: u16, op: BinaryOp) -> Option<InfixPower> {
    Some(InfixPower { left, right, op })
}

pub fn infix(kind: TokenKind) -> Option<InfixPower> {
    match kind {
        TokenKind::Colon => power(10, 20, BinaryOp::Qualify),
        TokenKind::Equals => power(10, 20, BinaryOp::IntersectAssignValue),
        TokenKind::QuestionMarkColon => power(10, 20, BinaryOp::IntersectDefaultValue),
        TokenKind::AmpersandAmpersand => power(30, 40, BinaryOp::IntersectLowPrecedence),
        TokenKind::VerticalBar => power(50, 60, BinaryOp::Union),
        TokenKind::Ampersand => power(70, 80, BinaryOp::Intersect),
        TokenKind::SynthDocument => power(90, 100, BinaryOp::Document),
        TokenKind::Or => power(110, 120, BinaryOp::LogicOr),
        TokenKind::And => power(130, 140, BinaryOp::LogicAnd),
        TokenKind::Compare => power(170, 180, BinaryOp::Compare),
        TokenKind::CompareReversed => power(170, 180, BinaryOp::CompareReversed),
        TokenKind::EqualsEquals => power(190, 200, BinaryOp::Equality),
        TokenKind::GreaterThan => power(190, 200, BinaryOp::GreaterThan),
        TokenKind::GreaterThanOrEquals => power(190, 200, BinaryOp::GreaterThanOrEquals),
        TokenKind::LessThan => power(190, 200, BinaryOp::LessThan),
        TokenKind::LessThanOrEquals => power(190, 200, BinaryOp::LessThanOrEquals),
        TokenKind::In => power(210, 220, BinaryOp::In),
        TokenKind::Is => power(210, 220, BinaryOp::Is),
        TokenKind::Matches => power(210, 220, BinaryOp::Match),
        TokenKind::NotMatches => power(210, 220, BinaryOp::NotMatch),
        TokenKind::Plus => power(230, 240, BinaryOp::Add),
        TokenKind::Dash => power(230, 240, BinaryOp::Subtract),
        TokenKind::DotDot => power(235, 236, BinaryOp::Range),
        TokenKind::Asterisk => power(250, 260, BinaryOp::Multiply),
        TokenKind::Slash => power(250, 260, BinaryOp::Divide),
        TokenKind::RightArrow => power(290, 300, BinaryOp::FunctionArrow),
        TokenKind::Dot => power(310, 320, BinaryOp::FieldReference),
        _ => None,
    }
}

pub fn prefix(kind: TokenKind) -> Option<(u16, UnaryOp)> {
    match kind {
        TokenKind::Not => Some((150, UnaryOp::Not)),
        TokenKind::Dash => Some((270, UnaryOp::Negate)),
        _ => None,
    }
}

pub fn postfix(kind: TokenKind) -> Option<(u16, Postfix)> {
    match kind {
        TokenKind::LeftBrace => Some((POSTFIX_POWER, Postfix::Brace)),
        TokenKind::LeftBracket => Some((POSTFIX_POWER, Postfix::Bracket)),
        TokenKind::LeftParenthesis => Some((POSTFIX_POWER, Postfix::Call)),
        TokenKind::QuestionMark => Some((POSTFIX_POWER, Postfix::Optional)),
        _ => None,
    }
}
