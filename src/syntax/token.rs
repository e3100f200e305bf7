use std::fmt;

use ordered_float::OrderedFloat;

use crate::util::num::format_number;

/// The kind of a lexical token.
///
/// This is a closed set: every token the scanner produces carries exactly one
/// of these kinds, and keywords are resolved at scan time through
/// [`keyword`], never by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens.
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens.
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals.
    /// A user-defined name such as `x` or `_total`.
    Identifier,
    /// A string literal such as `"hello"`.
    String,
    /// A numeric literal such as `42` or `3.14`.
    Number,

    // Keywords.
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input. Every token stream ends with exactly one of these.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the keywords that begin a new statement.
    ///
    /// These are the points where panic-mode recovery stops discarding
    /// tokens.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }

    /// Returns `true` for the ten operators a binary expression may carry.
    #[must_use]
    pub const fn is_binary_operator(self) -> bool {
        matches!(self,
                 Self::BangEqual
                 | Self::EqualEqual
                 | Self::Greater
                 | Self::GreaterEqual
                 | Self::Less
                 | Self::LessEqual
                 | Self::Minus
                 | Self::Plus
                 | Self::Slash
                 | Self::Star)
    }

    /// The conventional upper-snake name used in token listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up a lexeme in the reserved keyword table.
///
/// Only an exact, case-sensitive match counts: `or` is a keyword, `orchid`
/// and `Or` are identifiers.
///
/// # Example
/// ```
/// use lox_frontend::syntax::token::{TokenKind, keyword};
///
/// assert_eq!(keyword("while"), Some(TokenKind::While));
/// assert_eq!(keyword("whilst"), None);
/// ```
#[must_use]
pub fn keyword(lexeme: &str) -> Option<TokenKind> {
    let kind = match lexeme {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fun" => TokenKind::Fun,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// The value a literal token carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// The parsed value of a `NUMBER` token.
    Number(OrderedFloat<f64>),
    /// The contents of a `STRING` token, without the surrounding quotes.
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(n.into_inner())),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// A single lexical token.
///
/// Tokens are created once by the scanner and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The exact source text the token was scanned from.
    pub lexeme:  String,
    /// The literal value, present only for `NUMBER` and `STRING` tokens.
    pub literal: Option<Literal>,
    /// The source line on which the token ends (1-based).
    pub line:    usize,
}

impl Token {
    /// Creates a token without a literal value.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: None,
               line }
    }

    /// Creates a token that carries a literal value.
    #[must_use]
    pub fn with_literal(kind: TokenKind,
                        lexeme: impl Into<String>,
                        literal: Literal,
                        line: usize)
                        -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: Some(literal),
               line }
    }

    /// Creates the end-of-input sentinel for the given line.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               lexeme: String::new(),
               literal: None,
               line }
    }

    /// Returns `true` if this is the end-of-input sentinel.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Renders the tokenizer listing form: `KIND lexeme literal`.
///
/// ```
/// use lox_frontend::syntax::token::{Literal, Token, TokenKind};
/// use ordered_float::OrderedFloat;
///
/// let token = Token::with_literal(TokenKind::Number, "42", Literal::Number(OrderedFloat(42.0)), 1);
/// assert_eq!(token.to_string(), "NUMBER 42 42.0");
/// assert_eq!(Token::eof(1).to_string(), "EOF  null");
/// ```
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {literal}", self.kind, self.lexeme),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_is_exact() {
        assert_eq!(keyword("class"), Some(TokenKind::Class));
        assert_eq!(keyword("nil"), Some(TokenKind::Nil));
        assert_eq!(keyword("Class"), None);
        assert_eq!(keyword("classy"), None);
        assert_eq!(keyword(""), None);
    }

    #[test]
    fn statement_keywords() {
        for kind in [TokenKind::Class,
                     TokenKind::Fun,
                     TokenKind::Var,
                     TokenKind::For,
                     TokenKind::If,
                     TokenKind::While,
                     TokenKind::Print,
                     TokenKind::Return]
        {
            assert!(kind.starts_statement(), "{kind} should start a statement");
        }
        assert!(!TokenKind::Else.starts_statement());
        assert!(!TokenKind::Semicolon.starts_statement());
    }

    #[test]
    fn string_token_listing() {
        let token = Token::with_literal(TokenKind::String,
                                        "\"hi there\"",
                                        Literal::String("hi there".to_string()),
                                        3);
        assert_eq!(token.to_string(), "STRING \"hi there\" hi there");
    }

    #[test]
    fn fractional_number_listing() {
        let token = Token::with_literal(TokenKind::Number,
                                        "2.50",
                                        Literal::Number(OrderedFloat(2.5)),
                                        1);
        assert_eq!(token.to_string(), "NUMBER 2.50 2.5");
    }

    #[test]
    fn operator_listing() {
        assert_eq!(Token::new(TokenKind::BangEqual, "!=", 1).to_string(), "BANG_EQUAL != null");
    }
}
