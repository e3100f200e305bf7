use crate::{
    ast::{Expr, LiteralValue},
    error::SyntaxErrorKind,
    syntax::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
    util::num::parse_number_literal,
};

impl Parser<'_, '_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `-`  (numeric negation)
    /// - `!`  (logical not)
    ///
    /// Unary operators are right-associative, so an input like `!-x` is parsed
    /// as `!( -x )`. Each operator opens a nesting level.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("!" | "-") unary
    ///            | primary
    /// ```
    pub(in crate::syntax::parser) fn unary(&mut self) -> ParseResult<Expr> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            self.enter_nesting()?;
            let right = self.unary();
            self.leave_nesting();
            return Ok(Expr::unary(operator, right?));
        }

        self.primary()
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "false" | "true" | "nil"
    ///              | NUMBER | STRING
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `ExpectExpression` if the current token cannot start an operand,
    ///   including the end of input.
    /// - `ExpectClosingParen` if a group is not closed.
    /// - `TooDeeplyNested` if groups nest past the limit.
    pub(in crate::syntax::parser) fn primary(&mut self) -> ParseResult<Expr> {
        match self.peek().kind {
            TokenKind::False => {
                self.advance();
                Ok(Expr::literal(false))
            },
            TokenKind::True => {
                self.advance();
                Ok(Expr::literal(true))
            },
            TokenKind::Nil => {
                self.advance();
                Ok(Expr::literal(LiteralValue::Nil))
            },
            TokenKind::Number | TokenKind::String => match literal_value(self.peek()) {
                Some(value) => {
                    self.advance();
                    Ok(Expr::Literal { value })
                },
                None => Err(self.error_at_current(SyntaxErrorKind::ExpectExpression)),
            },
            TokenKind::LeftParen => {
                self.advance();
                self.enter_nesting()?;
                let expression = self.expression();
                self.leave_nesting();
                let expression = expression?;
                self.consume(TokenKind::RightParen, SyntaxErrorKind::ExpectClosingParen)?;
                Ok(Expr::grouping(expression))
            },
            _ => Err(self.error_at_current(SyntaxErrorKind::ExpectExpression)),
        }
    }
}

/// Extracts the value of a `NUMBER` or `STRING` token.
///
/// Scanned tokens always carry their literal. Hand-built tokens without one
/// fall back to their lexeme.
fn literal_value(token: &Token) -> Option<LiteralValue> {
    if let Some(literal) = &token.literal {
        return Some(literal.into());
    }

    match token.kind {
        TokenKind::Number => parse_number_literal(&token.lexeme).map(LiteralValue::from),
        TokenKind::String => token.lexeme
                                  .strip_prefix('"')
                                  .and_then(|rest| rest.strip_suffix('"'))
                                  .map(LiteralValue::from),
        _ => None,
    }
}
