//! AST data structures for ownership files.
//!
//! This module defines the nodes produced by the parser. Owners are kept as
//! opaque strings; nothing here interprets or validates them.

use super::span::Span;
use std::fmt::{self, Display};

/// A pattern in an ownership rule, as written in the file.
///
/// Escaped spaces (`foo\ bar`) are already recombined, so `text` holds the
/// single path segment `foo bar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The pattern text (e.g., "*.rs", "/src/**", "docs/").
    pub text: String,
    /// Location of the pattern in the source file.
    pub span: Span,
}

impl Pattern {
    /// Creates a new pattern with the given text and span.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape_spaces(&self.text))
    }
}

/// An owner attached to a rule: a handle, a team or an email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// The owner identifier exactly as written.
    pub name: String,
    /// Location in the source file.
    pub span: Span,
}

impl Owner {
    /// Creates a new owner.
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// Returns the owner identifier.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape_spaces(&self.name))
    }
}

/// The kind of line in an ownership file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A blank line (may contain only whitespace).
    Blank,
    /// A comment line (first token starts with '#').
    Comment {
        /// The comment content (without the leading '#').
        content: String,
    },
    /// A section header such as `[Frontend]`.
    Section {
        /// The section name without brackets.
        name: String,
    },
    /// A rule line with a pattern and one or more owners.
    Rule {
        /// The file path pattern.
        pattern: Pattern,
        /// The owners for files matching the pattern, in declaration order.
        owners: Vec<Owner>,
        /// The section in effect when the rule was declared; empty if none.
        section: String,
    },
    /// A line that was skipped, such as a pattern without owners.
    Invalid {
        /// The raw line content.
        raw: String,
        /// Description of what went wrong.
        error: String,
    },
}

/// A single line in an ownership file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The kind/content of this line.
    pub kind: LineKind,
    /// Location of the entire line in the source file.
    pub span: Span,
}

impl Line {
    /// Creates a new line with the given kind and span.
    pub fn new(kind: LineKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates a blank line.
    pub fn blank(span: Span) -> Self {
        Self::new(LineKind::Blank, span)
    }

    /// Creates a comment line.
    pub fn comment(content: impl Into<String>, span: Span) -> Self {
        Self::new(
            LineKind::Comment {
                content: content.into(),
            },
            span,
        )
    }

    /// Creates a section header line.
    pub fn section(name: impl Into<String>, span: Span) -> Self {
        Self::new(LineKind::Section { name: name.into() }, span)
    }

    /// Creates a rule line.
    pub fn rule(
        pattern: Pattern,
        owners: Vec<Owner>,
        section: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::new(
            LineKind::Rule {
                pattern,
                owners,
                section: section.into(),
            },
            span,
        )
    }

    /// Creates an invalid line.
    pub fn invalid(raw: impl Into<String>, error: impl Into<String>, span: Span) -> Self {
        Self::new(
            LineKind::Invalid {
                raw: raw.into(),
                error: error.into(),
            },
            span,
        )
    }

    /// Returns true if this is a rule line.
    pub fn is_rule(&self) -> bool {
        matches!(self.kind, LineKind::Rule { .. })
    }

    /// Returns true if this is a section header.
    pub fn is_section(&self) -> bool {
        matches!(self.kind, LineKind::Section { .. })
    }

    /// Returns true if this is a comment line.
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, LineKind::Comment { .. })
    }

    /// Returns true if this is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    /// Returns true if this is an invalid line.
    pub fn is_invalid(&self) -> bool {
        matches!(self.kind, LineKind::Invalid { .. })
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LineKind::Blank => Ok(()),
            LineKind::Comment { content } => write!(f, "#{}", content),
            LineKind::Section { name } => write!(f, "[{}]", name),
            LineKind::Rule {
                pattern, owners, ..
            } => {
                write!(f, "{}", pattern)?;
                for owner in owners {
                    write!(f, " {}", owner)?;
                }
                Ok(())
            }
            LineKind::Invalid { raw, .. } => f.write_str(raw),
        }
    }
}

/// The complete AST for an ownership file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeownersFile {
    /// All lines in the file, in order.
    pub lines: Vec<Line>,
}

impl CodeownersFile {
    /// Creates a new AST from the given lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Returns an iterator over all rule lines.
    pub fn rules(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| line.is_rule())
    }

    /// Returns the section names in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match &line.kind {
            LineKind::Section { name } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Returns true if any line was skipped as invalid.
    pub fn has_errors(&self) -> bool {
        self.lines.iter().any(|line| line.is_invalid())
    }

    /// Extracts all rules as (pattern, owners, section) triples.
    pub fn extract_rules(&self) -> Vec<(&Pattern, &[Owner], &str)> {
        self.lines
            .iter()
            .filter_map(|line| match &line.kind {
                LineKind::Rule {
                    pattern,
                    owners,
                    section,
                } => Some((pattern, owners.as_slice(), section.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Display for CodeownersFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Re-escapes spaces so a recombined field survives whitespace tokenizing.
fn escape_spaces(text: &str) -> String {
    text.replace(' ', "\\ ")
}
