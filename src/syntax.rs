/// The token model shared by the scanner and the parser.
///
/// Declares [`token::Token`], the closed [`token::TokenKind`] enumeration and
/// the reserved keyword table. The token sequence is the only interface
/// between the two stages.
///
/// # Responsibilities
/// - Defines every token kind the language recognises.
/// - Resolves keywords by exact match at scan time.
/// - Renders tokens in the `KIND lexeme literal` listing format.
pub mod token;
/// The scanner module tokenizes source code for further parsing.
///
/// The scanner reads the raw source text once, left to right, and produces
/// a sequence of tokens ending in an end-of-input sentinel.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   literal value and source line.
/// - Skips whitespace and `//` comments.
/// - Reports lexical errors for invalid or malformed input and keeps going.
pub mod scanner;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser that walks the precedence ladder
/// equality → comparison → term → factor → unary → primary.
///
/// # Responsibilities
/// - Converts tokens into a single expression tree.
/// - Reports the first syntax error and fails without a partial tree.
/// - Offers panic-mode resynchronization for callers that want to continue.
pub mod parser;
