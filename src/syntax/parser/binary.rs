use crate::{
    ast::Expr,
    syntax::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

const EQUALITY: [TokenKind; 2] = [TokenKind::BangEqual, TokenKind::EqualEqual];
const COMPARISON: [TokenKind; 4] = [TokenKind::Greater,
                                    TokenKind::GreaterEqual,
                                    TokenKind::Less,
                                    TokenKind::LessEqual];
const TERM: [TokenKind; 2] = [TokenKind::Minus, TokenKind::Plus];
const FACTOR: [TokenKind; 2] = [TokenKind::Slash, TokenKind::Star];

impl Parser<'_, '_> {
    /// Parses equality expressions.
    ///
    /// Grammar: `equality := comparison (("!=" | "==") comparison)*`
    pub(in crate::syntax::parser) fn equality(&mut self) -> ParseResult<Expr> {
        self.left_associative(&EQUALITY, Self::comparison)
    }

    /// Parses relational expressions.
    ///
    /// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
    pub(in crate::syntax::parser) fn comparison(&mut self) -> ParseResult<Expr> {
        self.left_associative(&COMPARISON, Self::term)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Grammar: `term := factor (("-" | "+") factor)*`
    pub(in crate::syntax::parser) fn term(&mut self) -> ParseResult<Expr> {
        self.left_associative(&TERM, Self::factor)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Grammar: `factor := unary (("/" | "*") unary)*`
    pub(in crate::syntax::parser) fn factor(&mut self) -> ParseResult<Expr> {
        self.left_associative(&FACTOR, Self::unary)
    }

    /// Parses one level of the precedence ladder.
    ///
    /// Reads an operand with `operand`, then keeps folding
    /// `operator operand` pairs into the left side for as long as the
    /// current token is one of `operators`. Chains therefore group to the
    /// left: `a - b - c` becomes `(a - b) - c`.
    ///
    /// # Parameters
    /// - `operators`: The operator kinds that belong to this level.
    /// - `operand`: The rule for the next-higher level.
    ///
    /// Every fold makes the tree one level taller, so each one counts
    /// against the tree depth limit until the chain is complete.
    ///
    /// # Returns
    /// A binary expression tree, or the single operand if no operator
    /// follows it.
    fn left_associative(&mut self,
                        operators: &[TokenKind],
                        operand: fn(&mut Self) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
        let mut left = operand(self)?;
        let mut folds = 0;

        while self.match_any(operators) {
            let operator = self.previous().clone();
            self.grow()?;
            folds += 1;
            let right = operand(self)?;
            left = Expr::binary(left, operator, right);
        }

        self.shrink(folds);
        Ok(left)
    }
}
