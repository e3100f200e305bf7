use crate::{
    error::{SyntaxError, SyntaxErrorKind},
    syntax::{
        parser::core::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH, ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

impl Parser<'_, '_> {
    /// Returns the token under the cursor without consuming it.
    ///
    /// Past the last token this keeps returning the end-of-input sentinel.
    #[must_use]
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.end)
    }

    /// Returns the most recently consumed token.
    ///
    /// Before anything has been consumed this is the token under the cursor.
    pub(in crate::syntax::parser) fn previous(&self) -> &Token {
        self.current
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or_else(|| self.peek())
    }

    /// Returns `true` once the cursor rests on the end-of-input sentinel.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Consumes the current token and returns it.
    ///
    /// The cursor never moves past the end-of-input sentinel.
    pub(in crate::syntax::parser) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Returns `true` if the current token has the given kind.
    ///
    /// The end-of-input sentinel matches nothing.
    pub(in crate::syntax::parser) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token if it has any of the given kinds.
    pub(in crate::syntax::parser) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a token of the expected kind, or reports `error` at the
    /// current token.
    ///
    /// # Errors
    /// Returns the reported [`SyntaxError`] if the current token does not
    /// have kind `kind`.
    pub(in crate::syntax::parser) fn consume(&mut self,
                                             kind: TokenKind,
                                             error: SyntaxErrorKind)
                                             -> ParseResult<&Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(self.error_at_current(error))
    }

    /// Opens one level of group or prefix operator.
    ///
    /// Call [`Parser::leave_nesting`] on the way out when this returns
    /// `Ok(())`.
    ///
    /// # Errors
    /// Reports `TooDeeplyNested` at the current token once either
    /// [`MAX_NESTING_DEPTH`] or [`MAX_TREE_DEPTH`] would be exceeded.
    pub(in crate::syntax::parser) fn enter_nesting(&mut self) -> ParseResult<()> {
        if self.nesting >= MAX_NESTING_DEPTH {
            return Err(self.error_at_current(SyntaxErrorKind::TooDeeplyNested));
        }
        self.grow()?;
        self.nesting += 1;
        Ok(())
    }

    /// Closes a level opened by [`Parser::enter_nesting`].
    pub(in crate::syntax::parser) const fn leave_nesting(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
        self.shrink(1);
    }

    /// Accounts for one more level of tree below the current node.
    ///
    /// # Errors
    /// Reports `TooDeeplyNested` at the current token once the tree would
    /// exceed [`MAX_TREE_DEPTH`].
    pub(in crate::syntax::parser) fn grow(&mut self) -> ParseResult<()> {
        if self.height >= MAX_TREE_DEPTH {
            return Err(self.error_at_current(SyntaxErrorKind::TooDeeplyNested));
        }
        self.height += 1;
        Ok(())
    }

    /// Gives back `levels` taken with [`Parser::grow`].
    pub(in crate::syntax::parser) const fn shrink(&mut self, levels: usize) {
        self.height = self.height.saturating_sub(levels);
    }

    /// Reports a syntax error at the current token and returns it for
    /// propagation.
    pub(in crate::syntax::parser) fn error_at_current(&mut self,
                                                      kind: SyntaxErrorKind)
                                                      -> SyntaxError {
        let error = SyntaxError::new(self.peek().clone(), kind);
        self.sink.report(error.clone().into());
        error
    }
}
