// expression     → equality ;
// equality       → comparison ( ( "!=" | "==" ) comparison )* ;
// comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
// term           → factor ( ( "-" | "+" ) factor )* ;
// factor         → unary ( ( "/" | "*" ) unary )* ;
// unary          → ( "!" | "-" ) unary | primary ;
// primary        → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")" ;

use tracing::debug;

use crate::{
    ast::Expr,
    diagnostic::DiagnosticSink,
    error::SyntaxError,
    syntax::token::Token,
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// How deep groups and prefix operators may nest before the parser gives up.
///
/// Each level costs a dozen stack frames on the way down the ladder.
pub const MAX_NESTING_DEPTH: usize = 128;

/// How tall a tree may grow, one level per operator or group.
///
/// Long operator chains do not recurse while parsing, but the trees they
/// build are walked recursively when printed and dropped.
pub const MAX_TREE_DEPTH: usize = 1024;

/// A recursive-descent parser over a borrowed token sequence.
///
/// The parser's state is its cursor and two nesting counters. It never
/// mutates the tokens and never scans; every syntax error goes to the sink
/// it was given before the failure propagates back to [`Parser::parse`].
pub struct Parser<'t, 's> {
    pub(in crate::syntax::parser) tokens:  &'t [Token],
    pub(in crate::syntax::parser) current: usize,
    /// Sentinel served once the cursor runs off the end of `tokens`.
    pub(in crate::syntax::parser) end:     Token,
    pub(in crate::syntax::parser) sink:    &'s mut dyn DiagnosticSink,
    /// Groups and prefix operators currently open.
    pub(in crate::syntax::parser) nesting: usize,
    /// Height of the tree along the path being built.
    pub(in crate::syntax::parser) height:  usize,
}

impl<'t, 's> Parser<'t, 's> {
    /// Creates a parser with its cursor on the first token.
    ///
    /// `tokens` should end with the end-of-input sentinel, as the scanner's
    /// output always does. A sequence that is empty or lacks one is parsed
    /// as if it were there.
    pub fn new(tokens: &'t [Token], sink: &'s mut dyn DiagnosticSink) -> Self {
        let end = match tokens.last() {
            Some(last) if last.is_eof() => last.clone(),
            Some(last) => Token::eof(last.line),
            None => Token::eof(1),
        };

        Self { tokens,
               current: 0,
               end,
               sink,
               nesting: 0,
               height: 0 }
    }

    /// Parses a single expression starting at the cursor.
    ///
    /// On success the cursor rests just past the consumed tokens. Tokens
    /// after the expression are left unread.
    ///
    /// # Errors
    /// Returns the first [`SyntaxError`] encountered. It has already been
    /// reported to the sink, and no partial tree survives it. Input nested
    /// past [`MAX_NESTING_DEPTH`] or [`MAX_TREE_DEPTH`] fails with
    /// `TooDeeplyNested`.
    pub fn parse(&mut self) -> ParseResult<Expr> {
        self.nesting = 0;
        self.height = 0;

        match self.expression() {
            Ok(expr) => {
                debug!(consumed = self.current, "parsed expression");
                Ok(expr)
            },
            Err(error) => {
                debug!(line = error.line(), "parse failed");
                Err(error)
            },
        }
    }

    /// The index of the token under the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current
    }

    /// Parses a full expression.
    ///
    /// This is the lowest-precedence rule; it starts the descent at
    /// equality.
    ///
    /// Grammar: `expression := equality`
    pub(in crate::syntax::parser) fn expression(&mut self) -> ParseResult<Expr> {
        self.equality()
    }
}

/// Parses one expression from a token sequence.
///
/// # Parameters
/// - `tokens`: The scanner's output, ending in the end-of-input sentinel.
/// - `sink`: Receives the syntax error, if any.
///
/// # Returns
/// The expression tree.
///
/// # Errors
/// Returns a [`SyntaxError`] if the tokens do not begin with a well-formed
/// expression.
///
/// # Example
/// ```
/// use lox_frontend::{
///     diagnostic::Diagnostic,
///     syntax::{parser::parse, scanner::scan},
/// };
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let tokens = scan("(1 + 2) * 3", &mut diagnostics);
/// let expr = parse(&tokens, &mut diagnostics).unwrap();
///
/// assert_eq!(expr.to_string(), "(* (group (+ 1.0 2.0)) 3.0)");
/// ```
pub fn parse(tokens: &[Token], sink: &mut dyn DiagnosticSink) -> ParseResult<Expr> {
    Parser::new(tokens, sink).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::LiteralValue,
        diagnostic::Diagnostic,
        error::SyntaxErrorKind,
        syntax::{scanner::scan, token::TokenKind},
    };

    fn tokens(source: &str) -> Vec<Token> {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let tokens = scan(source, &mut diagnostics);
        assert!(diagnostics.is_empty(), "unexpected lexical errors: {diagnostics:?}");
        tokens
    }

    fn parse_ok(source: &str) -> Expr {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let expr = parse(&tokens(source), &mut diagnostics).unwrap_or_else(|e| {
                                                                panic!("{source:?} failed: {e}")
                                                            });
        assert!(diagnostics.is_empty());
        expr
    }

    fn parse_err(source: &str) -> (SyntaxError, Vec<Diagnostic>) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let error = parse(&tokens(source), &mut diagnostics).expect_err("parse should fail");
        (error, diagnostics)
    }

    fn op(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, 1)
    }

    #[test]
    fn factor_binds_tighter_than_term() {
        let expected = Expr::binary(Expr::literal(1.0),
                                    op(TokenKind::Plus, "+"),
                                    Expr::binary(Expr::literal(2.0),
                                                 op(TokenKind::Star, "*"),
                                                 Expr::literal(3.0)));
        assert_eq!(parse_ok("1 + 2 * 3"), expected);
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expected = Expr::binary(Expr::binary(Expr::literal(1.0),
                                                 op(TokenKind::Minus, "-"),
                                                 Expr::literal(2.0)),
                                    op(TokenKind::Minus, "-"),
                                    Expr::literal(3.0));
        assert_eq!(parse_ok("1 - 2 - 3"), expected);
    }

    #[test]
    fn grouping_overrides_precedence() {
        match parse_ok("(1 + 2) * 3") {
            Expr::Binary { left, operator, .. } => {
                assert_eq!(operator.kind, TokenKind::Star);
                assert_eq!(*left,
                           Expr::grouping(Expr::binary(Expr::literal(1.0),
                                                       op(TokenKind::Plus, "+"),
                                                       Expr::literal(2.0))));
            },
            other => panic!("expected binary expression, found {other:?}"),
        }
    }

    #[test]
    fn full_ladder() {
        assert_eq!(parse_ok("1 == 2 < 3 + 4 * -5").to_string(),
                   "(== 1.0 (< 2.0 (+ 3.0 (* 4.0 (- 5.0)))))");
        assert_eq!(parse_ok("1 != 2 == 3").to_string(), "(== (!= 1.0 2.0) 3.0)");
        assert_eq!(parse_ok("1 >= 2 <= 3 > 4").to_string(), "(> (<= (>= 1.0 2.0) 3.0) 4.0)");
        assert_eq!(parse_ok("8 / 4 / 2").to_string(), "(/ (/ 8.0 4.0) 2.0)");
    }

    #[test]
    fn unary_is_right_associative() {
        assert_eq!(parse_ok("!!true").to_string(), "(! (! true))");
        assert_eq!(parse_ok("-!-1").to_string(), "(- (! (- 1.0)))");
    }

    #[test]
    fn primary_literals() {
        assert_eq!(parse_ok("nil"), Expr::literal(LiteralValue::Nil));
        assert_eq!(parse_ok("true"), Expr::literal(true));
        assert_eq!(parse_ok("false"), Expr::literal(false));
        assert_eq!(parse_ok("\"str\""), Expr::literal("str"));
        assert_eq!(parse_ok("12.5"), Expr::literal(12.5));
    }

    #[test]
    fn unclosed_group_fails_with_one_report() {
        let (error, diagnostics) = parse_err("(1 + 2");
        assert_eq!(error.kind, SyntaxErrorKind::ExpectClosingParen);
        assert!(error.token.is_eof());
        assert_eq!(diagnostics, vec![Diagnostic::Syntax(error.clone())]);
        assert!(diagnostics[0].to_string().contains("Expect ')'"));
    }

    #[test]
    fn missing_operand_fails() {
        let (error, diagnostics) = parse_err("1 +");
        assert_eq!(error.kind, SyntaxErrorKind::ExpectExpression);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(error.to_string(), "[line 1] Error at end: Expect expression.");
    }

    #[test]
    fn unexpected_token_is_named() {
        let (error, _) = parse_err("\n\n* 3");
        assert_eq!(error.to_string(), "[line 3] Error at '*': Expect expression.");
    }

    #[test]
    fn identifiers_are_not_primaries() {
        let (error, _) = parse_err("x + 1");
        assert_eq!(error.token.kind, TokenKind::Identifier);
    }

    #[test]
    fn empty_input_fails() {
        let (error, diagnostics) = parse_err("");
        assert_eq!(error.kind, SyntaxErrorKind::ExpectExpression);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn empty_token_slice_is_treated_as_end_of_input() {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let error = parse(&[], &mut diagnostics).expect_err("nothing to parse");
        assert!(error.token.is_eof());
        assert_eq!(error.line(), 1);
    }

    #[test]
    fn missing_sentinel_is_tolerated() {
        let mut tokens = tokens("(1");
        tokens.pop();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let error = parse(&tokens, &mut diagnostics).expect_err("group is unclosed");
        assert_eq!(error.kind, SyntaxErrorKind::ExpectClosingParen);
        assert!(error.token.is_eof());
    }

    #[test]
    fn cursor_stops_after_expression() {
        let tokens = tokens("1 + 2 ; 3");
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut parser = Parser::new(&tokens, &mut diagnostics);

        parser.parse().unwrap();
        assert_eq!(parser.position(), 3);
        assert_eq!(parser.peek().kind, TokenKind::Semicolon);
    }

    #[test]
    fn reparsing_is_idempotent() {
        let tokens = tokens("-(1 + 2) * 3 >= \"a\" == !nil");
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let first = parse(&tokens, &mut diagnostics).unwrap();
        let second = parse(&tokens, &mut diagnostics).unwrap();
        assert_eq!(first, second);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn deeply_nested_groups_fail() {
        let source = format!("{}1", "(".repeat(10_000));
        let (error, diagnostics) = parse_err(&source);

        assert_eq!(error.kind, SyntaxErrorKind::TooDeeplyNested);
        assert_eq!(error.token.kind, TokenKind::LeftParen);
        assert_eq!(diagnostics, vec![Diagnostic::Syntax(error)]);
    }

    #[test]
    fn deeply_nested_prefix_operators_fail() {
        for operator in ["-", "!"] {
            let source = format!("{}1", operator.repeat(10_000));
            let (error, diagnostics) = parse_err(&source);

            assert_eq!(error.kind, SyntaxErrorKind::TooDeeplyNested);
            assert_eq!(diagnostics.len(), 1);
        }
    }

    #[test]
    fn very_long_chains_fail() {
        let source = format!("1{}", " + 1".repeat(MAX_TREE_DEPTH + 1));
        let (error, _) = parse_err(&source);
        assert_eq!(error.kind, SyntaxErrorKind::TooDeeplyNested);
        assert_eq!(error.token.kind, TokenKind::Number);
    }

    #[test]
    fn nesting_below_the_limits_parses() {
        let depth = MAX_NESTING_DEPTH - 1;
        let grouped = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        let negated = format!("{}1", "-".repeat(depth));
        let chain = format!("1{}", " * 2".repeat(MAX_TREE_DEPTH / 2));

        assert!(parse_ok(&grouped).to_string().starts_with("(group (group"));
        assert!(parse_ok(&negated).to_string().starts_with("(- (- (-"));
        assert!(parse_ok(&chain).to_string().ends_with("2.0)"));
    }

    #[test]
    fn nesting_is_balanced_after_a_parse() {
        let tokens = tokens("((1)) + -(2 * !3) == 4");
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut parser = Parser::new(&tokens, &mut diagnostics);

        parser.parse().unwrap();
        assert_eq!(parser.nesting, 0);
        assert_eq!(parser.height, 0);
    }

    #[test]
    fn operators_keep_their_lines() {
        let expr = parse_ok("1\n+\n2");
        assert_eq!(expr.line_number(), Some(2));
    }
}
