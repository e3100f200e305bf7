/// Lexical errors.
///
/// Raised by the scanner for characters that start no token and for string
/// literals that run off the end of the input. Lexical errors never stop the
/// scan: the offending input is skipped and scanning continues.
pub mod lexical_error;
/// Syntax errors.
///
/// Raised by the parser when an expected token is missing. A syntax error ends
/// the parse; no partial tree is ever returned alongside one.
pub mod syntax_error;

use thiserror::Error;

pub use lexical_error::LexicalError;
pub use syntax_error::{SyntaxError, SyntaxErrorKind};

/// Why a piece of source text was rejected by [`crate::parse_source`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Scanning reported at least one lexical error.
    #[error("Source contains {count} lexical error(s).")]
    Lexical {
        /// How many lexical errors were reported.
        count: usize,
    },
    /// The token stream did not form an expression.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
