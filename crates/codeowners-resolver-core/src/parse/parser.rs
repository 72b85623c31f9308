//! Line and file-level parsers for ownership files.
//!
//! This module combines the lexer components to classify each line and to
//! produce the ordered rule list, tracking the section in effect as it goes.

use super::ast::{CodeownersFile, Line, Owner, Pattern};
use super::error::{ParseError, ParseResult};
use super::lexer::{
    combine_escaped_spaces, is_blank_line, parse_comment_line, parse_section_header, split_fields,
};
use super::span::Span;
use log::{debug, trace};

/// Parses a single line, updating `section` when the line is a header.
fn parse_line(
    line_text: &str,
    line_num: usize,
    line_offset: usize,
    section: &mut String,
) -> Result<Line, ParseError> {
    let line_span = Span::new(line_offset, line_num, 1, line_text.len());

    if is_blank_line(line_text) {
        return Ok(Line::blank(line_span));
    }

    if let Ok((_, comment_content)) = parse_comment_line(line_text) {
        return Ok(Line::comment(comment_content, line_span));
    }

    let fields = split_fields(line_text);
    if let Some(name) = parse_section_header(&fields) {
        trace!("Line {}: entering section {:?}", line_num, name);
        *section = name.clone();
        return Ok(Line::section(name, line_span));
    }

    let mut fields = combine_escaped_spaces(fields).into_iter();
    let Some(pattern_field) = fields.next() else {
        return Ok(Line::blank(line_span));
    };
    let owners: Vec<Owner> = fields
        .map(|f| {
            let span = Span::new(line_offset + f.offset, line_num, f.offset + 1, f.length);
            Owner::new(f.text, span)
        })
        .collect();

    if owners.is_empty() {
        return Err(ParseError::missing_owners(line_span));
    }

    let pattern_span = Span::new(
        line_offset + pattern_field.offset,
        line_num,
        pattern_field.offset + 1,
        pattern_field.length,
    );
    let pattern = Pattern::new(pattern_field.text, pattern_span);

    Ok(Line::rule(pattern, owners, section.clone(), line_span))
}

/// Parses the contents of an ownership file.
///
/// Rules come out in declaration order, each tagged with the section header
/// most recently seen above it. Lines that cannot become rules are kept as
/// `Invalid` lines and reported in `errors`; parsing itself never fails.
pub fn parse_codeowners(input: &str) -> ParseResult {
    debug!("Parsing CODEOWNERS file ({} bytes)", input.len());
    let mut lines = Vec::new();
    let mut errors = Vec::new();
    let mut section = String::new();
    let mut offset = 0;
    let mut remaining = input;

    for (line_idx, line_text) in input.lines().enumerate() {
        let line_num = line_idx + 1;

        match parse_line(line_text, line_num, offset, &mut section) {
            Ok(line) => {
                trace!("Line {}: parsed successfully", line_num);
                lines.push(line);
            }
            Err(error) => {
                debug!("Line {}: skipped - {}", line_num, error);
                let line_span = Span::new(offset, line_num, 1, line_text.len());
                lines.push(Line::invalid(line_text, error.to_string(), line_span));
                errors.push(error);
            }
        }

        // Advance by the real line ending so offsets hold for both LF and CRLF.
        let line_with_ending_len = if remaining.len() > line_text.len() {
            let after_content = &remaining[line_text.len()..];
            if after_content.starts_with("\r\n") {
                line_text.len() + 2
            } else if after_content.starts_with('\n') {
                line_text.len() + 1
            } else {
                line_text.len()
            }
        } else {
            line_text.len()
        };

        offset += line_with_ending_len;
        remaining = &remaining[line_with_ending_len..];
    }

    let ast = CodeownersFile::new(lines);

    debug!(
        "Parsing complete: {} lines, {} rules, {} skipped",
        ast.lines.len(),
        ast.rules().count(),
        errors.len()
    );
    if errors.is_empty() {
        ParseResult::ok(ast)
    } else {
        ParseResult::with_errors(ast, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::LineKind;

    const SAMPLE: &str = "# comment\n*\t@everyone\n\n   foobar/  someone@else.com\n\ndocs/**\t@org/docteam @joe";

    fn rule_summaries(result: &ParseResult) -> Vec<(String, Vec<String>, String)> {
        result
            .ast
            .extract_rules()
            .into_iter()
            .map(|(pattern, owners, section)| {
                (
                    pattern.text.clone(),
                    owners.iter().map(|o| o.name.clone()).collect(),
                    section.to_string(),
                )
            })
            .collect()
    }

    fn rule(pattern: &str, owners: &[&str], section: &str) -> (String, Vec<String>, String) {
        (
            pattern.to_string(),
            owners.iter().map(|o| o.to_string()).collect(),
            section.to_string(),
        )
    }

    #[test]
    fn parse_empty_file() {
        let result = parse_codeowners("");
        assert!(result.is_ok());
        assert!(result.ast.lines.is_empty());
    }

    #[test]
    fn parse_sample_rules_in_order() {
        let result = parse_codeowners(SAMPLE);
        assert!(result.is_ok());
        assert_eq!(
            rule_summaries(&result),
            vec![
                rule("*", &["@everyone"], ""),
                rule("foobar/", &["someone@else.com"], ""),
                rule("docs/**", &["@org/docteam", "@joe"], ""),
            ]
        );
    }

    #[test]
    fn parse_sections() {
        let result = parse_codeowners("[test]\n*   @everyone\n[test2]\n*/foo @everyoneelse");
        assert_eq!(
            rule_summaries(&result),
            vec![
                rule("*", &["@everyone"], "test"),
                rule("*/foo", &["@everyoneelse"], "test2"),
            ]
        );
        assert_eq!(result.ast.sections().collect::<Vec<_>>(), vec!["test", "test2"]);
    }

    #[test]
    fn rules_before_first_section_have_no_section() {
        let result = parse_codeowners("*.md @docs\n[Backend]\n/api/ @api");
        let rules = rule_summaries(&result);
        assert_eq!(rules[0].2, "");
        assert_eq!(rules[1].2, "Backend");
    }

    #[test]
    fn escaped_space_joins_pattern() {
        let result = parse_codeowners("docs/bob\\ test/ @owner\n");
        assert_eq!(
            rule_summaries(&result),
            vec![rule("docs/bob test/", &["@owner"], "")]
        );
    }

    #[test]
    fn escaped_hash_is_a_rule() {
        let result = parse_codeowners("\\#foo/ @hashowner\n");
        assert_eq!(
            rule_summaries(&result),
            vec![rule("\\#foo/", &["@hashowner"], "")]
        );
    }

    #[test]
    fn ownerless_pattern_is_skipped() {
        let result = parse_codeowners("*.rs\n*.js @frontend\n");
        assert!(result.has_errors());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].line(), 1);
        assert!(result.ast.lines[0].is_invalid());
        assert_eq!(rule_summaries(&result), vec![rule("*.js", &["@frontend"], "")]);
    }

    #[test]
    fn pattern_swallowing_all_fields_is_ownerless() {
        let result = parse_codeowners("docs\\ folder/\n");
        assert!(result.has_errors());
        assert_eq!(result.ast.rules().count(), 0);
    }

    #[test]
    fn comment_and_blank_lines_are_classified() {
        let result = parse_codeowners("# CODEOWNERS\n\n   # indented\n*.rs @rust\n");
        assert!(result.ast.lines[0].is_comment());
        assert!(result.ast.lines[1].is_blank());
        assert!(result.ast.lines[2].is_comment());
        assert!(result.ast.lines[3].is_rule());
    }

    #[test]
    fn spans_track_lines_and_columns() {
        let result = parse_codeowners("*.rs @owner\r\n  /docs/ @alice @bob\n");
        let line2 = &result.ast.lines[1];
        assert_eq!(line2.span.line, 2);
        assert_eq!(line2.span.offset, 13);

        if let LineKind::Rule {
            pattern, owners, ..
        } = &line2.kind
        {
            assert_eq!(pattern.span.column, 3);
            assert_eq!(pattern.span.length, 6);
            assert_eq!(owners[0].span.column, 10);
            assert_eq!(owners[1].span.column, 17);
            assert_eq!(owners[1].span.offset, 13 + 16);
        } else {
            panic!("Expected rule");
        }
    }

    #[test]
    fn display_round_trips_through_parser() {
        let input = "# owners\n[test]\ndocs/bob\\ test/ @owner\n";
        let result = parse_codeowners(input);
        assert_eq!(result.ast.to_string(), input);
    }
}
