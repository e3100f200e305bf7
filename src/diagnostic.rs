use std::fmt;

use tracing::debug;

use crate::error::{LexicalError, SyntaxError};

/// A single error report produced by the scanner or the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Reported by the scanner, anchored at a source line.
    Lexical(LexicalError),
    /// Reported by the parser, anchored at the offending token.
    Syntax(SyntaxError),
}

impl Diagnostic {
    /// The source line the problem was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lexical(error) => error.line(),
            Self::Syntax(error) => error.line(),
        }
    }

    /// Returns `true` for diagnostics raised by the scanner.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::Lexical(_))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical(error) => write!(f, "{error}"),
            Self::Syntax(error) => write!(f, "{error}"),
        }
    }
}

impl From<LexicalError> for Diagnostic {
    fn from(error: LexicalError) -> Self {
        Self::Lexical(error)
    }
}

impl From<SyntaxError> for Diagnostic {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

/// Receives every error the scanner and parser detect.
///
/// Each error is reported exactly once, at the point it is detected. A sink
/// must not fail; what it does with a report (print it, collect it, count it)
/// is up to the caller that owns it.
pub trait DiagnosticSink {
    /// Accepts one report.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects reports in order, for tests and for tools that render them later.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// A sink that prints each report to stderr and remembers whether any
/// error was seen.
#[derive(Debug, Default)]
pub struct Reporter {
    count: usize,
}

impl Reporter {
    /// Creates a reporter that has not seen any errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once at least one error has been reported.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.count > 0
    }

    /// The number of errors reported so far.
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.count
    }

    /// Forgets previous errors, e.g. between REPL lines.
    pub fn reset(&mut self) {
        debug!(discarded = self.count, "resetting reporter");
        self.count = 0;
    }
}

impl DiagnosticSink for Reporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        debug!(line = diagnostic.line(), lexical = diagnostic.is_lexical(), "diagnostic reported");
        eprintln!("{diagnostic}");
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::SyntaxErrorKind,
        syntax::token::{Token, TokenKind},
    };

    #[test]
    fn reporter_tracks_errors() {
        let mut reporter = Reporter::new();
        assert!(!reporter.had_error());

        reporter.report(LexicalError::UnterminatedString { line: 4 }.into());
        assert!(reporter.had_error());
        assert_eq!(reporter.error_count(), 1);

        reporter.reset();
        assert!(!reporter.had_error());
        assert_eq!(reporter.error_count(), 0);
    }

    #[test]
    fn had_error_follows_the_count() {
        let mut reporter = Reporter::new();
        for line in 1..=3 {
            reporter.report(LexicalError::UnterminatedString { line }.into());
            assert!(reporter.had_error());
            assert_eq!(reporter.error_count(), line);
        }

        reporter.reset();
        assert!(!reporter.had_error());
        reporter.report(LexicalError::UnterminatedString { line: 1 }.into());
        assert!(reporter.had_error());
    }

    #[test]
    fn diagnostics_carry_lines() {
        let lexical: Diagnostic = LexicalError::UnexpectedCharacter { character: '@',
                                                                      line:      7, }.into();
        let syntax: Diagnostic =
            SyntaxError::new(Token::new(TokenKind::RightParen, ")", 9),
                             SyntaxErrorKind::ExpectExpression).into();

        assert_eq!(lexical.line(), 7);
        assert!(lexical.is_lexical());
        assert_eq!(syntax.line(), 9);
        assert_eq!(syntax.to_string(), "[line 9] Error at ')': Expect expression.");
    }

    #[test]
    fn vec_sink_keeps_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(LexicalError::UnterminatedString { line: 1 }.into());
        sink.report(LexicalError::UnexpectedCharacter { character: '#', line: 2 }.into());
        assert_eq!(sink.iter().map(Diagnostic::line).collect::<Vec<_>>(), vec![1, 2]);
    }
}
