//! Configuration handling for the CLI.
//!
//! This module turns CLI arguments into a checked configuration, builds the
//! ownership table it describes and expands the requested paths.

use crate::cli::Args;
use codeowners_resolver_core::locate::path;
use codeowners_resolver_core::walk::{WalkConfig, list_files};
use codeowners_resolver_core::{OwnershipTable, ResolveError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// The ownership table could not be built.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every path was resolved.
    Success = 0,
    /// Application startup failed (wrong configuration or unreadable file).
    StartupFailure = 1,
    /// Some path had no owner and `--fail-on-unowned` was given.
    Unowned = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Where the ownership table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Read this file; rules are relative to the repository path.
    File(PathBuf),
    /// Search upward from the repository path.
    Search,
}

/// Validated and processed configuration for running the resolver.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Canonical repository path.
    pub repo_path: PathBuf,
    /// How to obtain the ownership table.
    pub source: TableSource,
    /// Paths to resolve, as given.
    pub paths: Vec<String>,
    /// Whether to show the section column.
    pub show_section: bool,
    /// Whether to print only unowned paths.
    pub only_unowned: bool,
    /// Whether unowned paths fail the run.
    pub fail_on_unowned: bool,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let repo_path = args.repository_path.canonicalize().map_err(|e| {
            ConfigError::Invalid(format!(
                "repository path '{}' is invalid: {}",
                args.repository_path.display(),
                e
            ))
        })?;

        if !repo_path.is_dir() {
            return Err(ConfigError::Invalid(format!(
                "repository path '{}' is not a directory",
                repo_path.display()
            )));
        }

        let source = match &args.file {
            Some(file) if !file.is_file() => {
                return Err(ConfigError::Invalid(format!(
                    "CODEOWNERS file '{}' does not exist",
                    file.display()
                )));
            }
            Some(file) => TableSource::File(file.clone()),
            None => TableSource::Search,
        };

        Ok(Self {
            repo_path,
            source,
            paths: args.paths.clone(),
            show_section: args.section,
            only_unowned: args.unowned,
            fail_on_unowned: args.fail_on_unowned,
            json_output: args.json,
        })
    }

    /// Builds the ownership table this configuration describes.
    pub fn build_table(&self) -> Result<OwnershipTable, ConfigError> {
        let table = match &self.source {
            TableSource::File(file) => {
                OwnershipTable::from_file(file, self.repo_path.display().to_string())?
            }
            TableSource::Search => OwnershipTable::from_path(&self.repo_path)?,
        };
        Ok(table)
    }

    /// Directory on disk that query paths are relative to.
    pub fn query_root<'a>(&'a self, table: &'a OwnershipTable) -> &'a Path {
        match self.source {
            TableSource::File(_) => &self.repo_path,
            TableSource::Search => Path::new(table.repo_root()),
        }
    }

    /// Expands the requested paths into root-relative paths to resolve.
    ///
    /// Directories are replaced by the files beneath them; anything else is
    /// kept as given, even if it does not exist.
    pub fn expand_paths(&self, root: &Path) -> Vec<String> {
        let walk_config = WalkConfig::default();
        let mut expanded = Vec::new();

        for requested in &self.paths {
            let relative = path::clean(&requested.replace('\\', "/"));
            let on_disk = if relative == "." {
                root.to_path_buf()
            } else {
                root.join(&relative)
            };

            if on_disk.is_dir() {
                for file in list_files(&on_disk, &walk_config) {
                    expanded.push(path::join(&relative, &file));
                }
            } else {
                expanded.push(relative);
            }
        }
        expanded
    }

    /// Determines the exit code from the number of unowned paths.
    pub fn exit_code_for_results(&self, unowned: usize) -> ExitCode {
        if self.fail_on_unowned && unowned > 0 {
            ExitCode::Unowned
        } else {
            ExitCode::Success
        }
    }
}
