//! CODEOWNERS Resolver Core
//!
//! A library for answering "who owns this path?" from a CODEOWNERS file.
//!
//! # Features
//!
//! - **Locator**: Find the ownership file by searching upward through a
//!   repository, in `.`, `docs`, `.github` and `.gitlab` at each level
//! - **Parser**: Parse ownership files into an AST with span metadata,
//!   including GitLab-style `[section]` headers and escaped spaces
//! - **Matching**: Lower gitignore-style patterns to regular expressions
//! - **Resolution**: Last matching rule wins, exactly as declared
//!
//! # Quick Start
//!
//! ```rust
//! use codeowners_resolver_core::OwnershipTable;
//!
//! let input = r#"
//! # CODEOWNERS file
//! *       @global
//! *.js    @js-owner
//!
//! [Build]
//! /build/logs/ @doctocat
//! "#;
//!
//! let table = OwnershipTable::from_contents(input, "");
//!
//! assert_eq!(table.owners_of("foo.js"), ["@js-owner"]);
//! assert_eq!(table.owners_of("build/logs/x.go"), ["@doctocat"]);
//! assert_eq!(table.section_of("build/logs/x.go"), "Build");
//! assert_eq!(table.owners_of("foo.py"), ["@global"]);
//! ```
//!
//! # Modules
//!
//! - [`locate`]: Finding the ownership file and the repository root
//! - [`parse`]: Parser for ownership files
//! - [`matching`]: Pattern compilation
//! - [`table`]: The ownership table and its queries
//! - [`shared`]: A process-wide table built at most once
//! - [`lookup`]: Read-only lookup trait for downstream consumers
//! - [`walk`]: Listing repository files

pub mod error;
pub mod locate;
pub mod lookup;
pub mod matching;
pub mod parse;
pub mod shared;
pub mod table;
pub mod walk;

#[cfg(feature = "generate")]
pub mod generate;

// Re-export commonly used types at the crate root
pub use error::ResolveError;
pub use locate::{FileSystem, LocatorConfig, MemoryFileSystem, OsFileSystem, locate_codeowners_file};
pub use lookup::OwnerLookup;
pub use matching::CompiledPattern;
pub use parse::{CodeownersFile, ParseResult, parse_codeowners};
pub use shared::shared_table;
pub use table::{OwnershipRule, OwnershipTable};
