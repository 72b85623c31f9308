//! The ownership table and its queries.
//!
//! A table is built once from the contents of an ownership file and is
//! immutable afterwards. Queries scan the rules from last to first; the first
//! rule whose pattern matches decides the answer, so later declarations take
//! precedence over earlier ones.

use crate::error::ResolveError;
use crate::locate::{self, FileSystem, OsFileSystem, path};
use crate::matching::CompiledPattern;
use crate::parse::{LineKind, Span, parse_codeowners};
use log::debug;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

/// One rule of an ownership file: a pattern and the owners it assigns.
#[derive(Debug, Clone)]
pub struct OwnershipRule {
    pattern: String,
    matcher: CompiledPattern,
    owners: Vec<String>,
    section: String,
    span: Span,
}

impl OwnershipRule {
    /// Creates a rule, compiling its pattern.
    pub fn new<I, S>(pattern: &str, owners: I, section: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: pattern.to_string(),
            matcher: CompiledPattern::new(pattern),
            owners: owners.into_iter().map(Into::into).collect(),
            section: section.into(),
            span: Span::default(),
        }
    }

    /// Records where the rule was declared.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The pattern as written in the ownership file.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The compiled matcher for the pattern.
    pub fn matcher(&self) -> &CompiledPattern {
        &self.matcher
    }

    /// Owners in declaration order.
    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    /// The section the rule was declared in; empty outside any section.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Location of the declaring line.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// 1-based line number of the declaring line.
    pub fn line(&self) -> usize {
        self.span.line
    }

    /// Checks whether the rule applies to a root-relative path.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }
}

impl fmt::Display for OwnershipRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.pattern, self.owners.join(", "))
    }
}

/// All rules of one ownership file, interpreted relative to a root.
#[derive(Debug, Clone, Default)]
pub struct OwnershipTable {
    repo_root: String,
    rules: Vec<OwnershipRule>,
}

impl OwnershipTable {
    /// Creates a table from already-built rules, in declaration order.
    pub fn new(repo_root: impl Into<String>, rules: Vec<OwnershipRule>) -> Self {
        Self {
            repo_root: repo_root.into(),
            rules,
        }
    }

    /// Builds a table from in-memory ownership file contents.
    pub fn from_contents(contents: &str, repo_root: impl Into<String>) -> Self {
        let parsed = parse_codeowners(contents);
        let rules: Vec<OwnershipRule> = parsed
            .ast
            .lines
            .iter()
            .filter_map(|line| match &line.kind {
                LineKind::Rule {
                    pattern,
                    owners,
                    section,
                } => Some(
                    OwnershipRule::new(&pattern.text, owners.iter().map(|o| o.name.clone()), section.as_str())
                        .with_span(line.span),
                ),
                _ => None,
            })
            .collect();

        let table = Self::new(repo_root, rules);
        debug!(
            "Built ownership table with {} rules ({} lines skipped), root '{}'",
            table.len(),
            parsed.errors.len(),
            table.repo_root
        );
        table
    }

    /// Builds a table from a reader over ownership file contents.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn from_reader<R: Read>(reader: R, repo_root: impl Into<String>) -> Result<Self, ResolveError> {
        let repo_root = repo_root.into();
        let contents = read_contents(reader, &repo_root)?;
        Ok(Self::from_contents(&contents, repo_root))
    }

    /// Reads a specific ownership file, interpreting it relative to `repo_root`.
    pub fn from_file(file: impl AsRef<Path>, repo_root: impl Into<String>) -> Result<Self, ResolveError> {
        let file = file.as_ref();
        let label = file.display().to_string();
        let handle = File::open(file).map_err(|e| ResolveError::io(&label, e))?;
        let repo_root = repo_root.into();
        let contents = read_contents(handle, &label)?;
        Ok(Self::from_contents(&contents, repo_root))
    }

    /// Searches `fs` upward from `start` and builds a table from the file found.
    ///
    /// The directory level where the file was found becomes the root.
    pub fn from_fs<F>(fs: &F, start: &str) -> Result<Self, ResolveError>
    where
        F: FileSystem + ?Sized,
    {
        let located = locate::locate_codeowners_file(fs, start)?
            .ok_or_else(|| ResolveError::not_found(start))?;
        let contents = read_contents(located.reader, &located.path)?;
        Ok(Self::from_contents(&contents, located.root))
    }

    /// Searches the real filesystem upward from `start`.
    ///
    /// The search may ascend to the root of the volume. The recorded root is
    /// the real directory containing the ownership file, so absolute paths
    /// inside the repository can be queried directly.
    pub fn from_path(start: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let start = start.as_ref();
        let (base, relative) = split_volume(start)?;
        let fs = OsFileSystem::new(&base);

        let located = locate::locate_codeowners_file(&fs, &relative)?
            .ok_or_else(|| ResolveError::not_found(start.display().to_string()))?;
        let contents = read_contents(located.reader, &located.path)?;

        let root = if located.root == "." {
            base
        } else {
            base.join(&located.root)
        };
        Ok(Self::from_contents(&contents, root.display().to_string()))
    }

    /// The directory the patterns are interpreted relative to.
    pub fn repo_root(&self) -> &str {
        &self.repo_root
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[OwnershipRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Finds the rule that decides ownership of `path`, with its index.
    pub fn matching_rule(&self, path: &str) -> Option<(usize, &OwnershipRule)> {
        let relative = self.strip_root(path);
        self.rules
            .iter()
            .enumerate()
            .rev()
            .find(|(_, rule)| rule.matches(relative))
    }

    /// Owners of `path`; empty when no rule matches.
    pub fn owners_of(&self, path: &str) -> &[String] {
        self.matching_rule(path)
            .map(|(_, rule)| rule.owners())
            .unwrap_or(&[])
    }

    /// Section of the rule deciding `path`; empty when no rule matches.
    pub fn section_of(&self, path: &str) -> &str {
        self.matching_rule(path)
            .map(|(_, rule)| rule.section())
            .unwrap_or("")
    }

    /// Strips the root from `path` when the path lies under it.
    fn strip_root<'p>(&self, path: &'p str) -> &'p str {
        if self.repo_root.is_empty() {
            return path;
        }
        match path.strip_prefix(self.repo_root.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') || self.repo_root.ends_with('/') => {
                rest
            }
            _ => path,
        }
    }
}

fn read_contents<R: Read>(mut reader: R, label: &str) -> Result<String, ResolveError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| ResolveError::io(label, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Splits an absolute path into its volume root and the slash-separated rest.
fn split_volume(start: &Path) -> Result<(PathBuf, String), ResolveError> {
    let absolute =
        std::path::absolute(start).map_err(|e| ResolveError::io(start.display().to_string(), e))?;

    let mut base = PathBuf::new();
    let mut rest: Vec<String> = Vec::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => base.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => rest.push("..".to_string()),
            Component::Normal(name) => rest.push(name.to_string_lossy().into_owned()),
        }
    }
    Ok((base, path::clean(&rest.join("/"))))
}
