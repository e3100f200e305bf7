/// Numeric literal helpers.
///
/// This module parses the text of numeric literals and formats numbers for
/// token listings and AST dumps, so that both share a single notion of how a
/// number looks on screen.
pub mod num;
