//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for
//! resolved paths.

use codeowners_resolver_core::OwnershipTable;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Width the path column is padded to in human output.
const PATH_WIDTH: usize = 70;

/// The answer for one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The path as queried.
    pub path: String,
    /// Owners of the path; empty when unowned.
    pub owners: Vec<String>,
    /// Section of the deciding rule; empty when none.
    pub section: String,
    /// Pattern of the deciding rule.
    pub pattern: Option<String>,
    /// Line of the deciding rule in the ownership file.
    pub line: Option<usize>,
}

impl Resolution {
    /// Resolves a single path against a table.
    pub fn resolve(table: &OwnershipTable, path: &str) -> Self {
        match table.matching_rule(path) {
            Some((_, rule)) => Self {
                path: path.to_string(),
                owners: rule.owners().to_vec(),
                section: rule.section().to_string(),
                pattern: Some(rule.pattern().to_string()),
                line: Some(rule.line()),
            },
            None => Self {
                path: path.to_string(),
                owners: Vec::new(),
                section: String::new(),
                pattern: None,
                line: None,
            },
        }
    }

    /// Returns true if no rule assigns owners to the path.
    pub fn is_unowned(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Resolutions for every requested path.
#[derive(Debug, Default)]
pub struct Resolutions {
    entries: Vec<Resolution>,
}

impl Resolutions {
    /// Resolves every path against the table, in order.
    pub fn collect<'a>(table: &OwnershipTable, paths: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            entries: paths
                .into_iter()
                .map(|path| Resolution::resolve(table, path))
                .collect(),
        }
    }

    /// All resolutions.
    pub fn entries(&self) -> &[Resolution] {
        &self.entries
    }

    /// Number of unowned paths.
    pub fn unowned_count(&self) -> usize {
        self.entries.iter().filter(|r| r.is_unowned()).count()
    }

    /// Keeps only the unowned paths.
    pub fn retain_unowned(&mut self) {
        self.entries.retain(Resolution::is_unowned);
    }

    /// Writes the resolutions as a JSON array.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }

    /// Writes the resolutions in human-readable form.
    pub fn write_human<W: Write>(
        &self,
        writer: W,
        use_colors: bool,
        show_section: bool,
    ) -> std::io::Result<()> {
        let mut output = HumanOutput::new(writer, use_colors, show_section);
        for resolution in &self.entries {
            output.write_resolution(resolution)?;
        }
        Ok(())
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
    show_section: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool, show_section: bool) -> Self {
        Self {
            writer,
            use_colors,
            show_section,
        }
    }

    /// Writes one line for a resolved path.
    pub fn write_resolution(&mut self, resolution: &Resolution) -> std::io::Result<()> {
        let path = format!("{:<width$}", resolution.path, width = PATH_WIDTH);

        let section = if self.show_section {
            let name = if resolution.section.is_empty() {
                "-".to_string()
            } else {
                format!("[{}]", resolution.section)
            };
            if self.use_colors {
                format!("{}  ", name.cyan())
            } else {
                format!("{}  ", name)
            }
        } else {
            String::new()
        };

        let owners = if resolution.is_unowned() {
            if self.use_colors {
                "(unowned)".yellow().bold().to_string()
            } else {
                "(unowned)".to_string()
            }
        } else {
            let joined = resolution.owners.join(" ");
            if self.use_colors {
                joined.green().to_string()
            } else {
                joined
            }
        };

        writeln!(self.writer, "{}  {}{}", path, section, owners)
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}
