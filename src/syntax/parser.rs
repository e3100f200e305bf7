/// Parser state and the top of the grammar.
///
/// Declares the [`core::Parser`] cursor, the [`core::ParseResult`] alias and
/// the `expression` rule every other level ultimately serves.
pub mod core;

/// Binary operator levels.
///
/// Implements the four left-associative levels of the precedence ladder:
/// equality, comparison, term and factor.
pub mod binary;

/// Unary and primary expressions.
///
/// Handles the right-associative prefix operators and the atoms of the
/// language: literals and parenthesized groups.
pub mod unary;

/// Cursor primitives.
///
/// Lookahead, advancing, matching, nesting accounting and the single place
/// where syntax errors are reported.
pub mod utils;

/// Panic-mode recovery.
///
/// Skips tokens up to the next statement boundary after a syntax error.
pub mod recovery;

pub use core::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH, ParseResult, Parser, parse};
