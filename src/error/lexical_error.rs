use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while scanning source text.
pub enum LexicalError {
    /// A character that cannot begin any token.
    #[error("[line {line}] Error: Unexpected character: {character}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal whose closing `"` never appears.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        /// The line on which the input ran out.
        line: usize,
    },
}

impl LexicalError {
    /// The source line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }
}
