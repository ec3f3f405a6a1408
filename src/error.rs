//! Error types for template body parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `${` without a closing `}`
    #[error("unterminated placeholder at {span:?}")]
    Unterminated { span: Span },

    /// `${}`
    #[error("empty placeholder at {span:?}")]
    Empty { span: Span },

    /// Input the lexer could not tokenize
    #[error("unrecognized input at {span:?}")]
    Unrecognized { span: Span },

    /// Placeholder whose identifier contains characters outside `[A-Za-z0-9_]`
    #[error("invalid placeholder identifier '{ident}' at {span:?}")]
    InvalidIdentifier { ident: String, span: Span },
}

impl ParseError {
    /// Byte range of the offending token in the body
    pub fn span(&self) -> &Span {
        match self {
            ParseError::Unterminated { span }
            | ParseError::Empty { span }
            | ParseError::Unrecognized { span }
            | ParseError::InvalidIdentifier { span, .. } => span,
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            ParseError::Unterminated { .. } => "expected '}' to close this placeholder",
            ParseError::Empty { .. } => "placeholder needs an identifier",
            ParseError::Unrecognized { .. } => "not part of any text or placeholder token",
            ParseError::InvalidIdentifier { .. } => {
                "identifiers may only contain letters, digits and '_'"
            }
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.hint())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessor() {
        let err = ParseError::InvalidIdentifier {
            ident: "a b".to_string(),
            span: 3..9,
        };
        assert_eq!(err.span(), &(3..9));
    }

    #[test]
    fn test_display_names_identifier() {
        let err = ParseError::InvalidIdentifier {
            ident: "a-b".to_string(),
            span: 0..6,
        };
        assert!(err.to_string().contains("'a-b'"));
    }

    #[test]
    fn test_format_includes_filename_and_hint() {
        let source = "Hello ${name";
        let err = ParseError::Unterminated { span: 6..12 };
        let report = err.format(source, "greet");
        assert!(report.contains("greet"));
        assert!(report.contains("expected '}'"));
    }
}
