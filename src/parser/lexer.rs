//! Lexer for template bodies using logos

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    // Well-formed placeholder: ${identifier}
    #[regex(r"\$\{[A-Za-z0-9_]+\}", |lex| inner(lex.slice()), priority = 10)]
    Placeholder(String),

    // Anything else between `${` and the next `}` (empty, spaces, nested `${`)
    #[regex(r"\$\{[^}]*\}", |lex| inner(lex.slice()))]
    Malformed(String),

    // `${` with no closing brace anywhere after it; runs to the end of input
    #[regex(r"\$\{[^}]*")]
    Unterminated,

    // A lone `$` is literal text
    #[token("$")]
    Dollar,

    #[regex(r"[^$]+")]
    Text,
}

/// Strip the `${` prefix and `}` suffix from a placeholder slice
fn inner(slice: &str) -> String {
    slice[2..slice.len() - 1].to_string()
}

/// Lex a template body into tokens with spans
///
/// Every byte of the input belongs to exactly one item, so concatenating
/// the slices reproduces the input. Bytes no token accepts come back as
/// `Err(())` for the caller to report.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}
