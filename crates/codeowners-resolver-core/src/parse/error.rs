//! Diagnostics produced while parsing ownership files.
//!
//! Parsing never fails outright: lines that cannot become rules are skipped
//! and reported here so callers can surface them if they care.

use super::span::Span;
use thiserror::Error;

/// A problem found on a single line of an ownership file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A pattern line has no owners; the line is ignored.
    #[error("line {line}: rule has no owners")]
    MissingOwners {
        /// The line number (1-based).
        line: usize,
        /// Location of the ownerless line.
        span: Span,
    },
}

impl ParseError {
    /// Creates a missing owners error.
    pub fn missing_owners(span: Span) -> Self {
        Self::MissingOwners {
            line: span.line,
            span,
        }
    }

    /// Returns the span associated with this error.
    pub fn span(&self) -> &Span {
        match self {
            ParseError::MissingOwners { span, .. } => span,
        }
    }

    /// Returns the line number where this error occurred.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingOwners { line, .. } => *line,
        }
    }
}

/// The result of parsing an ownership file.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed AST, with skipped lines kept as `Invalid`.
    pub ast: super::ast::CodeownersFile,
    /// Lines that were skipped and why.
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Creates a parse result with no diagnostics.
    pub fn ok(ast: super::ast::CodeownersFile) -> Self {
        Self {
            ast,
            errors: Vec::new(),
        }
    }

    /// Creates a parse result with diagnostics.
    pub fn with_errors(ast: super::ast::CodeownersFile, errors: Vec<ParseError>) -> Self {
        Self { ast, errors }
    }

    /// Returns true if every line parsed cleanly.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if some lines were skipped.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ast::CodeownersFile;

    #[test]
    fn missing_owners_reports_line() {
        let error = ParseError::missing_owners(Span::new(10, 2, 1, 5));
        assert!(matches!(error, ParseError::MissingOwners { line: 2, .. }));
        assert_eq!(error.line(), 2);
        assert_eq!(error.span().offset, 10);
        assert_eq!(error.to_string(), "line 2: rule has no owners");
    }

    #[test]
    fn parse_result_status() {
        assert!(ParseResult::ok(CodeownersFile::default()).is_ok());

        let errors = vec![ParseError::missing_owners(Span::default())];
        let result = ParseResult::with_errors(CodeownersFile::default(), errors);
        assert!(result.has_errors());
        assert!(!result.is_ok());
    }
}
