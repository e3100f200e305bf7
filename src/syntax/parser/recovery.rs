use tracing::trace;

use crate::syntax::{parser::core::Parser, token::TokenKind};

impl Parser<'_, '_> {
    /// Discards tokens until a likely statement boundary.
    ///
    /// Always consumes at least the current token, then stops just after a
    /// `;`, or just before a keyword that starts a statement, or at the end
    /// of input. Callers use this after a syntax error to resume parsing at
    /// the next top-level construct.
    pub fn synchronize(&mut self) {
        let from = self.current;
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon || self.peek().kind.starts_statement() {
                break;
            }
            self.advance();
        }

        trace!(from, to = self.current, "synchronized");
    }
}
