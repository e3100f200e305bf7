use std::fmt;

use ordered_float::OrderedFloat;

use crate::{
    syntax::token::{Literal, Token},
    util::num::format_number,
};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code: `nil`, the two booleans, numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    /// The absent value, written `nil`.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A 64-bit floating-point literal.
    Number(OrderedFloat<f64>),
    /// A string literal, without its quotes.
    String(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&Literal> for LiteralValue {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Self::Number(*n),
            Literal::String(s) => Self::String(s.clone()),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(n.into_inner())),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The set of variants is closed. Every node exclusively owns its children,
/// so a tree is finite and acyclic, and dropping the root drops the whole
/// tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A literal value (number, string, boolean or nil).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A prefix operation: `!right` or `-right`.
    Unary {
        /// The operator token, either `!` or `-`.
        operator: Token,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// An infix operation on two operands.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A parenthesized sub-expression.
    Grouping {
        /// The expression between the parentheses.
        expression: Box<Self>,
    },
}

impl Expr {
    /// Creates a literal node.
    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Creates a unary node.
    #[must_use]
    pub fn unary(operator: Token, right: Self) -> Self {
        Self::Unary { operator,
                      right: Box::new(right) }
    }

    /// Creates a binary node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }

    /// Creates a grouping node.
    #[must_use]
    pub fn grouping(expression: Self) -> Self {
        Self::Grouping { expression: Box::new(expression) }
    }

    /// Gets the line number of the first operator found in `self`.
    ///
    /// Literals carry no token and therefore no line; groupings report the
    /// line of the expression they wrap.
    ///
    /// ## Example
    /// ```
    /// use lox_frontend::{
    ///     ast::Expr,
    ///     syntax::token::{Token, TokenKind},
    /// };
    ///
    /// let expr = Expr::unary(Token::new(TokenKind::Minus, "-", 5), Expr::literal(1.0));
    ///
    /// assert_eq!(expr.line_number(), Some(5));
    /// assert_eq!(Expr::literal(true).line_number(), None);
    /// ```
    #[must_use]
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Literal { .. } => None,
            Self::Unary { operator, .. } | Self::Binary { operator, .. } => Some(operator.line),
            Self::Grouping { expression } => expression.line_number(),
        }
    }
}

/// Prints the tree in fully parenthesized prefix form.
///
/// ```
/// use lox_frontend::{
///     ast::Expr,
///     syntax::token::{Token, TokenKind},
/// };
///
/// let expr = Expr::binary(Expr::unary(Token::new(TokenKind::Minus, "-", 1), Expr::literal(123.0)),
///                         Token::new(TokenKind::Star, "*", 1),
///                         Expr::grouping(Expr::literal(45.67)));
///
/// assert_eq!(expr.to_string(), "(* (- 123.0) (group 45.67))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
            Self::Binary { left, operator, right } => {
                write!(f, "({} {left} {right})", operator.lexeme)
            },
            Self::Grouping { expression } => write!(f, "(group {expression})"),
        }
    }
}
