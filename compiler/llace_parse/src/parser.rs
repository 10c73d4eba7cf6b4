//! Pratt expression parser.
//!
//! Every token is inspected through [`Parser::peek`] before it is used, so
//! an error-kind token fails the parse at the first point the parser
//! reaches it, whatever was expected there.

use std::sync::Arc;

use llace_ir::{BinaryOp, Expr, ExprKind, Origin, Token, TokenKind};
use llace_lexer::{LlaceTokens, ScannerBuffer, TokenSource};
use llace_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::binding_power::{self, Postfix};
use crate::error::{ErrorCode, ParseError};

/// Tokens that can start an expression, as listed in diagnostics.
const EXPRESSION_START: &[TokenKind] = &[
    TokenKind::CharLiteral,
    TokenKind::Dash,
    TokenKind::DateLiteral,
    TokenKind::DateTimeLiteral,
    TokenKind::Identifier,
    TokenKind::IntegerLiteral,
    TokenKind::LeadingDocumentation,
    TokenKind::LeftBracket,
    TokenKind::LeftParenthesis,
    TokenKind::MultilineString,
    TokenKind::Not,
    TokenKind::StringLiteral,
    TokenKind::TrailingDocumentation,
    TokenKind::UuidLiteral,
];

pub struct Parser<S> {
    tokens: ScannerBuffer<S>,
    file_name: Arc<str>,
}

impl<'src> Parser<LlaceTokens<'src>> {
    /// Parser over the standard scanner pipeline.
    pub fn new(source: &'src str, file_name: &str) -> Self {
        Parser::from_tokens(llace_lexer::scan(source, file_name), file_name)
    }
}

impl<S: TokenSource> Parser<S> {
    pub fn from_tokens(tokens: ScannerBuffer<S>, file_name: &str) -> Self {
        Parser {
            tokens,
            file_name: Arc::from(file_name),
        }
    }

    /// Parse one expression, stopping at the first token that cannot
    /// continue it.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_expression_bp(0)
    }

    /// Parse a comma-separated item list running to end of file, as a
    /// `Parenthesized` node without the parentheses.
    pub fn parse_items(&mut self) -> Result<Expr, ParseError> {
        debug!(file = %self.file_name, "parsing items");
        let origin = self.peek()?.origin.clone();
        let items = self.parse_parenthesized(origin, TokenKind::Eof);
        if let Err(error) = &items {
            debug!(file = %self.file_name, code = %error.code, "parse failed");
        }
        items
    }

    /// Require that all input has been consumed.
    pub fn expect_end(&mut self) -> Result<(), ParseError> {
        self.consume(TokenKind::Eof).map(drop)
    }

    // ─── Token access ───

    /// The next token, or the lexical error it represents.
    fn peek(&self) -> Result<&Token, ParseError> {
        let token = self.tokens.peek_token();
        match ErrorCode::for_lexical_error(token.kind) {
            Some(code) => Err(ParseError::lexical(code, token)),
            None => Ok(token),
        }
    }

    fn check(&self, kind: TokenKind) -> Result<bool, ParseError> {
        Ok(self.peek()?.kind == kind)
    }

    fn bump(&mut self) -> Result<Token, ParseError> {
        self.peek()?;
        Ok(self.tokens.read_token())
    }

    /// Consume the next token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.check(kind)? {
            self.tokens.read_token();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn consume(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.peek()?;
        if token.kind != kind {
            return Err(ParseError::expected_one_of(&[kind], token));
        }
        Ok(self.tokens.read_token())
    }

    // ─── Expressions ───

    fn parse_expression_bp(&mut self, min_bp: u16) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_bp_inner(min_bp))
    }

    fn parse_expression_bp_inner(&mut self, min_bp: u16) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_left_hand_side()?;

        loop {
            let kind = self.peek()?.kind;

            if let Some((bp, postfix)) = binding_power::postfix(kind) {
                if bp < min_bp {
                    break;
                }
                let token = self.bump()?;
                lhs = self.parse_postfix(postfix, token.origin, lhs)?;
                continue;
            }

            if let Some(power) = binding_power::infix(kind) {
                if power.left < min_bp {
                    break;
                }
                let token = self.bump()?;
                trace!(op = ?power.op, origin = %token.origin, "infix");
                let rhs = self.parse_expression_bp(power.right)?;
                lhs = combine_infix(lhs, power.op, token.origin, rhs);
                continue;
            }

            break;
        }

        Ok(lhs)
    }

    fn parse_left_hand_side(&mut self) -> Result<Expr, ParseError> {
        let token = self.bump()?;

        if let Some((bp, op)) = binding_power::prefix(token.kind) {
            let operand = self.parse_expression_bp(bp)?;
            return Ok(Expr::new(
                ExprKind::Prefix {
                    op,
                    operand: Box::new(operand),
                },
                token.origin,
            ));
        }

        let kind = match token.kind {
            TokenKind::CharLiteral => ExprKind::CharLiteral(token.text),
            TokenKind::DateLiteral => ExprKind::DateLiteral(token.text),
            TokenKind::DateTimeLiteral => ExprKind::DateTimeLiteral(token.text),
            TokenKind::Identifier => ExprKind::Identifier(token.text),
            TokenKind::IntegerLiteral => ExprKind::IntegerLiteral(token.text),
            TokenKind::StringLiteral => ExprKind::StringLiteral(token.text),
            TokenKind::UuidLiteral => ExprKind::UuidLiteral(token.text),
            TokenKind::LeadingDocumentation => ExprKind::LeadingDocumentation(lines(&token)),
            TokenKind::TrailingDocumentation => {
                ExprKind::TrailingDocumentation(lines(&token))
            }
            TokenKind::MultilineString => ExprKind::MultilineString(lines(&token)),
            TokenKind::LeftBracket => return self.parse_array_literal(token.origin),
            TokenKind::LeftParenthesis => {
                return self.parse_parenthesized(token.origin, TokenKind::RightParenthesis)
            }
            _ => return Err(ParseError::expected_one_of(EXPRESSION_START, &token)),
        };

        Ok(Expr::new(kind, token.origin))
    }

    fn parse_postfix(
        &mut self,
        postfix: Postfix,
        origin: Origin,
        lhs: Expr,
    ) -> Result<Expr, ParseError> {
        let lhs = Box::new(lhs);
        let kind = match postfix {
            Postfix::Brace => {
                if self.eat(TokenKind::RightBrace)? {
                    ExprKind::SetType(lhs)
                } else {
                    let key = self.parse_expression()?;
                    self.consume(TokenKind::RightBrace)?;
                    ExprKind::MapType {
                        item: lhs,
                        key: Box::new(key),
                    }
                }
            }
            Postfix::Bracket => {
                if self.eat(TokenKind::Semicolon)? {
                    self.consume(TokenKind::RightBracket)?;
                    ExprKind::ListType(lhs)
                } else if self.eat(TokenKind::RightBracket)? {
                    ExprKind::ArrayType(lhs)
                } else {
                    return Err(ParseError::unsupported_index(origin));
                }
            }
            Postfix::Call => {
                let arguments =
                    self.parse_parenthesized(origin.clone(), TokenKind::RightParenthesis)?;
                ExprKind::FunctionCall {
                    callee: lhs,
                    arguments: Box::new(arguments),
                }
            }
            Postfix::Optional => ExprKind::Optional(lhs),
        };
        Ok(Expr::new(kind, origin))
    }

    fn parse_array_literal(&mut self, origin: Origin) -> Result<Expr, ParseError> {
        let mut elements = Vec::new();
        if !self.eat(TokenKind::RightBracket)? {
            loop {
                elements.push(self.parse_expression()?);
                if !self.eat(TokenKind::Comma)? {
                    break;
                }
            }
            self.consume(TokenKind::RightBracket)?;
        }
        Ok(Expr::new(ExprKind::ArrayLiteral(elements), origin))
    }

    /// Comma-separated items up to and including `end`. The opening token,
    /// if any, has already been consumed.
    fn parse_parenthesized(&mut self, origin: Origin, end: TokenKind) -> Result<Expr, ParseError> {
        let mut items = Vec::new();
        while !self.check(end)? {
            items.push(self.parse_expression()?);
            if !self.eat(TokenKind::Comma)? {
                break;
            }
        }
        self.consume(end)?;
        Ok(Expr::new(ExprKind::Parenthesized(items), origin))
    }
}

/// Join `rhs` onto `lhs` with `op`.
///
/// When `lhs` is already an `op` node, `rhs` becomes its next operand and
/// the node keeps its origin; otherwise a new two-operand node is built at
/// the operator's origin.
fn combine_infix(lhs: Expr, op: BinaryOp, op_origin: Origin, rhs: Expr) -> Expr {
    match lhs.into_parts() {
        (ExprKind::Infix { op: existing, mut operands }, origin) if existing == op => {
            operands.push(rhs);
            Expr::new(ExprKind::Infix { op, operands }, origin)
        }
        (kind, origin) => Expr::new(
            ExprKind::Infix {
                op,
                operands: vec![Expr::new(kind, origin), rhs],
            },
            op_origin,
        ),
    }
}

fn lines(token: &Token) -> Vec<String> {
    token.lines().map(String::from).collect()
}
