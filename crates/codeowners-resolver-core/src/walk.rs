//! Listing the files of a repository.
//!
//! Used to expand a directory argument into the files beneath it before
//! resolving their owners.

use ignore::WalkBuilder;
use log::{debug, trace};
use std::ffi::OsStr;
use std::path::Path;

/// Configuration for the repository walk.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Whether to include hidden files and directories (starting with `.`).
    /// Default: true
    pub include_hidden: bool,
    /// Whether to respect `.gitignore` rules (only works in git repos).
    /// Default: true
    pub respect_gitignore: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            include_hidden: true,
            respect_gitignore: true,
        }
    }
}

impl WalkConfig {
    /// Creates a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to include hidden files.
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Sets whether to respect .gitignore rules.
    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }
}

/// Lists the files under `root`, sorted.
///
/// Returns paths relative to `root` with forward slashes. The `.git`
/// directory is never entered. Unreadable entries are skipped.
pub fn list_files(root: &Path, config: &WalkConfig) -> Vec<String> {
    debug!(
        "Listing files in {:?} (hidden={}, gitignore={})",
        root, config.include_hidden, config.respect_gitignore
    );

    let walker = WalkBuilder::new(root)
        .hidden(!config.include_hidden)
        .ignore(false)
        .git_ignore(config.respect_gitignore)
        .git_global(config.respect_gitignore)
        .git_exclude(config.respect_gitignore)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| entry.file_name() != OsStr::new(".git"))
        .build();

    let mut files = Vec::new();
    for entry in walker.filter_map(|e| e.ok()) {
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(root)
            && let Some(path_str) = relative.to_str()
        {
            files.push(path_str.replace('\\', "/"));
        }
    }

    debug!("Found {} files", files.len());
    trace!("Files: {:?}", files);
    files
}
