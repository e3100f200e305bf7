use thiserror::Error;

use crate::syntax::token::Token;

/// The reasons a parse can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// No literal, grouping or unary operator where an operand was required.
    #[error("Expect expression.")]
    ExpectExpression,
    /// A parenthesized expression was not closed.
    #[error("Expect ')' after expression.")]
    ExpectClosingParen,
    /// Groups, prefix operators or operator chains nested past the parser's
    /// limits.
    #[error("Expression nests too deeply.")]
    TooDeeplyNested,
}

/// A syntax error, anchored at the token where parsing could not continue.
///
/// Renders as `[line N] Error at 'lexeme': message`, or
/// `[line N] Error at end: message` when the input ran out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {}] Error{}: {kind}", .token.line, location(.token))]
pub struct SyntaxError {
    /// The token the parser was looking at when it gave up.
    pub token: Token,
    /// What the parser expected instead.
    pub kind:  SyntaxErrorKind,
}

impl SyntaxError {
    /// Creates a syntax error at `token`.
    #[must_use]
    pub const fn new(token: Token, kind: SyntaxErrorKind) -> Self {
        Self { token, kind }
    }

    /// The source line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.token.line
    }
}

fn location(token: &Token) -> String {
    if token.is_eof() {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::token::TokenKind;

    #[test]
    fn renders_offending_lexeme() {
        let error = SyntaxError::new(Token::new(TokenKind::Star, "*", 2),
                                     SyntaxErrorKind::ExpectExpression);
        assert_eq!(error.to_string(), "[line 2] Error at '*': Expect expression.");
    }

    #[test]
    fn renders_end_of_input() {
        let error = SyntaxError::new(Token::eof(1), SyntaxErrorKind::ExpectClosingParen);
        assert_eq!(error.to_string(), "[line 1] Error at end: Expect ')' after expression.");
    }
}
