//! # lox-frontend
//!
//! lox-frontend turns Lox source text into an expression tree. It scans the
//! text into tokens, then parses those tokens with a recursive-descent parser
//! that follows Lox's precedence ladder.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Expr,
    diagnostic::{Diagnostic, DiagnosticSink},
    error::SourceError,
    syntax::{parser::parse, scanner::scan},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the literal values it carries.
/// The AST is built by the parser and handed to whichever collaborator
/// consumes it: an evaluator, a pretty-printer, a test.
///
/// # Responsibilities
/// - Defines the closed set of expression node types.
/// - Keeps operator tokens on nodes so consumers can report source lines.
/// - Prints trees in parenthesized prefix form.
pub mod ast;
/// Error reporting plumbing shared by the scanner and the parser.
///
/// The scanner and parser never print anything. They hand every error to a
/// [`diagnostic::DiagnosticSink`] passed in by the caller, which decides what
/// to do with it.
///
/// # Responsibilities
/// - Defines the `Diagnostic` report and the `DiagnosticSink` trait.
/// - Provides a collecting sink and a stderr reporter with an error flag.
pub mod diagnostic;
/// Provides unified error types for scanning and parsing.
///
/// This module defines all errors that can be raised during scanning or
/// parsing. Every error carries the source line it was detected on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser).
/// - Attaches line numbers and offending tokens for context.
/// - Integrates with standard error handling traits.
pub mod error;
/// The front end proper: tokens, scanner and parser.
///
/// # Responsibilities
/// - Scans source text into an end-terminated token sequence.
/// - Parses the token sequence into a single expression.
pub mod syntax;
/// Numeric helpers shared by the scanner and the printers.
pub mod util;

/// Scans and parses a piece of source text.
///
/// Every lexical and syntax error is reported to `sink` as it is found. A
/// source with lexical errors is still parsed, so that its syntax errors are
/// reported too, but it is rejected either way.
///
/// # Errors
/// - [`SourceError::Syntax`] if the tokens do not form an expression.
/// - [`SourceError::Lexical`] if scanning reported any errors.
///
/// # Examples
/// ```
/// use lox_frontend::{diagnostic::Diagnostic, parse_source};
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let expr = parse_source("1 + 2 * 3", &mut diagnostics).unwrap();
/// assert_eq!(expr.to_string(), "(+ 1.0 (* 2.0 3.0))");
///
/// // An unknown character is reported, skipped and rejected.
/// assert!(parse_source("1 # 2", &mut diagnostics).is_err());
/// assert_eq!(diagnostics.len(), 1);
/// ```
pub fn parse_source(source: &str, sink: &mut dyn DiagnosticSink) -> Result<Expr, SourceError> {
    let mut counter = CountingSink { inner: sink,
                                     lexical: 0 };
    let tokens = scan(source, &mut counter);
    let lexical = counter.lexical;

    let expr = parse(&tokens, counter.inner)?;
    if lexical > 0 {
        debug!(lexical, "rejecting source with lexical errors");
        return Err(SourceError::Lexical { count: lexical });
    }

    Ok(expr)
}

/// Forwards reports while counting the lexical ones.
struct CountingSink<'s> {
    inner:   &'s mut dyn DiagnosticSink,
    lexical: usize,
}

impl DiagnosticSink for CountingSink<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_lexical() {
            self.lexical += 1;
        }
        self.inner.report(diagnostic);
    }
}
