//! Template body parser: turns lexer tokens into text and placeholder segments

use crate::error::{ParseError, Span};
use crate::parser::lexer::{lex, Token};

/// One piece of a parsed template body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied through unchanged
    Text(String),
    /// A `${name}` token and its byte range in the body
    Placeholder { name: String, span: Span },
}

/// Parse a template body into segments
///
/// Adjacent literal pieces (text and lone `$`) are merged into a single
/// `Segment::Text`. Fails on the first malformed placeholder or on any
/// input the lexer cannot tokenize.
pub fn parse(input: &str) -> Result<Vec<Segment>, ParseError> {
    let mut segments = Vec::new();
    let mut text = String::new();

    for (token, span) in lex(input) {
        let Ok(token) = token else {
            return Err(ParseError::Unrecognized { span });
        };
        match token {
            Token::Text | Token::Dollar => text.push_str(&input[span]),
            Token::Placeholder(name) => {
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Placeholder { name, span });
            }
            Token::Malformed(ident) if ident.is_empty() => {
                return Err(ParseError::Empty { span });
            }
            Token::Malformed(ident) => {
                return Err(ParseError::InvalidIdentifier { ident, span });
            }
            Token::Unterminated => return Err(ParseError::Unterminated { span }),
        }
    }

    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    Ok(segments)
}

/// Check whether a string is a well-formed placeholder identifier
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
