//! Parser module for ownership files.
//!
//! Turns the line-oriented `CODEOWNERS` grammar into an AST: comments,
//! `[section]` headers, escaped spaces and pattern/owner rules, each with
//! span metadata pointing back at the source.
//!
//! # Example
//!
//! ```rust
//! use codeowners_resolver_core::parse::parse_codeowners;
//!
//! let input = "[Frontend]\n*.js @js-owner\ndocs/bob\\ test/ @owner\n";
//!
//! let result = parse_codeowners(input);
//! for (pattern, owners, section) in result.ast.extract_rules() {
//!     println!("{} -> {:?} ({})", pattern.text, owners, section);
//! }
//! ```

mod ast;
mod error;
mod lexer;
mod parser;
pub mod span;

pub use ast::{CodeownersFile, Line, LineKind, Owner, Pattern};
pub use error::{ParseError, ParseResult};
pub use parser::parse_codeowners;
pub use span::Span;

// Lexer utilities for callers that tokenize lines themselves
pub use lexer::{Field, combine_escaped_spaces, split_fields};
