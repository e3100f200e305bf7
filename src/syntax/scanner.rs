use logos::{Lexer, Logos};
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::{
    diagnostic::DiagnosticSink,
    error::LexicalError,
    syntax::token::{Literal, Token, TokenKind, keyword},
    util::num::parse_number_literal,
};

/// Why the generated lexer could not produce a lexeme.
///
/// Unmatched input falls back to the default, `UnexpectedCharacter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanFailure {
    #[default]
    UnexpectedCharacter,
    UnterminatedString,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number; newlines inside string literals are
/// counted by the string callback, all others by the newline rule.
#[derive(Default)]
struct ScanExtras {
    line: usize,
}

/// Raw lexical classes recognised by the generated lexer.
///
/// Everything that becomes a token is folded into `Token(kind)`; the other
/// variants only exist to drive skipping and are never produced.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = ScanExtras)]
#[logos(error = ScanFailure)]
#[logos(skip r"[ \t\r]+")]
enum Lexeme {
    #[token("(", |_| TokenKind::LeftParen)]
    #[token(")", |_| TokenKind::RightParen)]
    #[token("{", |_| TokenKind::LeftBrace)]
    #[token("}", |_| TokenKind::RightBrace)]
    #[token(",", |_| TokenKind::Comma)]
    #[token(".", |_| TokenKind::Dot)]
    #[token("-", |_| TokenKind::Minus)]
    #[token("+", |_| TokenKind::Plus)]
    #[token(";", |_| TokenKind::Semicolon)]
    #[token("*", |_| TokenKind::Star)]
    #[token("/", |_| TokenKind::Slash)]
    #[token("!", |_| TokenKind::Bang)]
    #[token("!=", |_| TokenKind::BangEqual)]
    #[token("=", |_| TokenKind::Equal)]
    #[token("==", |_| TokenKind::EqualEqual)]
    #[token("<", |_| TokenKind::Less)]
    #[token("<=", |_| TokenKind::LessEqual)]
    #[token(">", |_| TokenKind::Greater)]
    #[token(">=", |_| TokenKind::GreaterEqual)]
    #[token("\"", scan_string)]
    #[regex(r"[0-9]+(\.[0-9]+)?", |_| TokenKind::Number)]
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| keyword(lex.slice()).unwrap_or(TokenKind::Identifier))]
    Token(TokenKind),

    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,

    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
}

/// Consumes a string literal after its opening quote.
///
/// The literal may span lines. If the closing quote never appears, the rest
/// of the input is consumed and the literal is rejected.
fn scan_string(lex: &mut Lexer<Lexeme>) -> Result<TokenKind, ScanFailure> {
    let (consumed, newlines, closed) = {
        let remainder = lex.remainder();
        remainder.find('"').map_or_else(|| (remainder.len(), remainder.matches('\n').count(), false),
                                        |end| (end + 1, remainder[..end].matches('\n').count(), true))
    };

    lex.extras.line += newlines;
    lex.bump(consumed);

    if closed { Ok(TokenKind::String) } else { Err(ScanFailure::UnterminatedString) }
}

/// Builds a token from a scanned lexeme, attaching its literal value.
fn make_token(kind: TokenKind, lexeme: &str, line: usize) -> Token {
    let literal = match kind {
        TokenKind::Number => {
            parse_number_literal(lexeme).map(|value| Literal::Number(OrderedFloat(value)))
        },
        // The lexeme always starts and ends with a one-byte quote.
        TokenKind::String => Some(Literal::String(lexeme[1..lexeme.len() - 1].to_string())),
        _ => None,
    };

    Token { kind,
            lexeme: lexeme.to_string(),
            literal,
            line }
}

/// Scans source text into a token sequence.
///
/// Scanning is a single left-to-right pass that always runs to the end of
/// the input and always returns a sequence ending in exactly one
/// [`TokenKind::Eof`] token. Lexical errors are reported to `sink` and the
/// offending input is skipped; no token is emitted for it.
///
/// # Parameters
/// - `source`: The full source text.
/// - `sink`: Receives one report per lexical error.
///
/// # Returns
/// The scanned tokens, terminated by the end-of-input sentinel.
///
/// # Example
/// ```
/// use lox_frontend::{
///     diagnostic::Diagnostic,
///     syntax::{scanner::scan, token::TokenKind},
/// };
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let tokens = scan("1 + 2 * 3", &mut diagnostics);
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::Plus,
///             TokenKind::Number,
///             TokenKind::Star,
///             TokenKind::Number,
///             TokenKind::Eof]);
/// assert!(diagnostics.is_empty());
/// ```
pub fn scan(source: &str, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
    let mut lexer = Lexeme::lexer_with_extras(source, ScanExtras { line: 1 });
    let mut tokens = Vec::new();
    let mut errors = 0usize;

    while let Some(lexeme) = lexer.next() {
        let line = lexer.extras.line;
        match lexeme {
            Ok(Lexeme::Token(kind)) => {
                let token = make_token(kind, lexer.slice(), line);
                trace!(%token, line, "scanned token");
                tokens.push(token);
            },
            // Skipped by their callbacks before they reach this loop.
            Ok(Lexeme::Newline | Lexeme::Comment) => {},
            Err(ScanFailure::UnexpectedCharacter) => {
                for character in lexer.slice().chars() {
                    errors += 1;
                    sink.report(LexicalError::UnexpectedCharacter { character, line }.into());
                }
            },
            Err(ScanFailure::UnterminatedString) => {
                errors += 1;
                sink.report(LexicalError::UnterminatedString { line }.into());
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    debug!(tokens = tokens.len(), errors, lines = lexer.extras.line, "scan complete");

    tokens
}
