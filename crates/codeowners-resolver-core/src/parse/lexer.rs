//! Lexer for ownership file lines.
//!
//! Lines are tokenized on whitespace:
//! fields are maximal runs of non-whitespace characters, and a field ending
//! in a backslash continues into the next one (an escaped space).

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::rest,
};

/// A whitespace-delimited field of a line, with its byte position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The field text. After recombination this may contain spaces.
    pub text: String,
    /// Byte offset of the field start within the line.
    pub offset: usize,
    /// Length in bytes of the source text the field covers.
    pub length: usize,
}

impl Field {
    /// Creates a field from its text and starting offset.
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        let length = text.len();
        Self {
            text,
            offset,
            length,
        }
    }

    /// Byte offset just past the end of the field within the line.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

fn whitespace0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn field(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

/// Parses a comment line (optional whitespace + `#` + content).
///
/// An escaped hash (`\#`) does not start a comment.
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (whitespace0, char('#'), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// Splits a line into whitespace-delimited fields.
pub fn split_fields(line: &str) -> Vec<Field> {
    let mut fields = Vec::new();
    let mut remaining = line;

    loop {
        let Ok((after_ws, _)) = whitespace0(remaining) else {
            break;
        };
        let Ok((after_field, text)) = field(after_ws) else {
            break;
        };
        fields.push(Field::new(text, line.len() - after_ws.len()));
        remaining = after_field;
    }

    fields
}

/// Rejoins fields that were split on an escaped space.
///
/// Any field ending in a backslash that is not the last field is joined to
/// the next one with a single space, dropping the trailing backslashes. This
/// repeats while the consumed field itself ends in a backslash, so chains such
/// as `a\ b\ c` collapse into one field.
pub fn combine_escaped_spaces(fields: Vec<Field>) -> Vec<Field> {
    let mut combined = Vec::with_capacity(fields.len());
    let mut i = 0;

    while i < fields.len() {
        let offset = fields[i].offset;
        let mut text = fields[i].text.clone();
        while fields[i].text.ends_with('\\') && i + 1 < fields.len() {
            text = format!("{} {}", text.trim_end_matches('\\'), fields[i + 1].text);
            i += 1;
        }
        combined.push(Field {
            text,
            offset,
            length: fields[i].end() - offset,
        });
        i += 1;
    }

    combined
}

/// Returns the section name if the fields form a `[name]` header.
///
/// The first field must start with `[` and the last must end with `]`. The
/// name is every field joined by single spaces with the brackets removed.
pub fn parse_section_header(fields: &[Field]) -> Option<String> {
    let first = fields.first()?;
    let last = fields.last()?;
    if !first.text.starts_with('[') || !last.text.ends_with(']') {
        return None;
    }

    let joined = fields
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let name = joined.strip_prefix('[').unwrap_or(&joined);
    let name = name.strip_suffix(']').unwrap_or(name);
    Some(name.trim().to_string())
}
