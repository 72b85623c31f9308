//! Locating the ownership file of a repository.
//!
//! Starting from a directory, each level is searched for a `CODEOWNERS` file
//! in a fixed list of candidate subdirectories (`.`, `docs`, `.github`,
//! `.gitlab`, in that order). The first hit wins and the directory level where
//! it was found becomes the repository root. Otherwise the search moves to the
//! parent directory until the root of the filesystem is reached.
//!
//! ```
//! use codeowners_resolver_core::locate::{MemoryFileSystem, locate_codeowners_file};
//!
//! let fs = MemoryFileSystem::new().with_file("repo/.github/CODEOWNERS", "* @team\n");
//! let found = locate_codeowners_file(&fs, "repo/src/lib").unwrap().unwrap();
//! assert_eq!(found.root, "repo");
//! assert_eq!(found.path, "repo/.github/CODEOWNERS");
//! ```

mod fs;
pub mod path;

pub use fs::{EntryKind, FileSystem, MemoryFileSystem, OsFileSystem};

use crate::error::ResolveError;
use log::{debug, trace};
use std::fmt;
use std::io::{self, Read};

/// Subdirectories searched at each level, in precedence order.
pub const DEFAULT_CANDIDATE_DIRS: [&str; 4] = [".", "docs", ".github", ".gitlab"];

/// Name of the ownership file.
pub const DEFAULT_FILE_NAME: &str = "CODEOWNERS";

/// Where the locator looks at each directory level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Subdirectories checked at each level, first match wins.
    pub candidate_dirs: Vec<String>,
    /// File name looked for inside each candidate.
    pub file_name: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            candidate_dirs: DEFAULT_CANDIDATE_DIRS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl LocatorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the candidate subdirectories.
    pub fn with_candidate_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidate_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the ownership file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }
}

/// An ownership file found by the locator.
pub struct LocatedFile<'a> {
    /// Open handle to the file contents.
    pub reader: Box<dyn Read + 'a>,
    /// Directory level where the file was found; the repository root.
    pub root: String,
    /// Name of the file itself.
    pub path: String,
}

impl fmt::Debug for LocatedFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocatedFile")
            .field("root", &self.root)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Searches for the ownership file using the default candidates.
///
/// Returns `Ok(None)` when no level up to the filesystem root has one.
pub fn locate_codeowners_file<'a, F>(
    fs: &'a F,
    start: &str,
) -> Result<Option<LocatedFile<'a>>, ResolveError>
where
    F: FileSystem + ?Sized,
{
    locate_with_config(fs, start, &LocatorConfig::default())
}

/// Searches for the ownership file using a custom configuration.
pub fn locate_with_config<'a, F>(
    fs: &'a F,
    start: &str,
    config: &LocatorConfig,
) -> Result<Option<LocatedFile<'a>>, ResolveError>
where
    F: FileSystem + ?Sized,
{
    let mut dir = path::clean(start);
    debug!("Searching for {} starting at '{}'", config.file_name, dir);

    loop {
        for candidate in &config.candidate_dirs {
            let candidate_dir = path::join(&dir, candidate);
            trace!("Checking '{}'", candidate_dir);

            if !is_dir(fs, &candidate_dir)? {
                continue;
            }

            let file = path::join(&candidate_dir, &config.file_name);
            if !is_file(fs, &file)? {
                continue;
            }

            let reader = fs.open(&file).map_err(|e| ResolveError::io(&file, e))?;
            debug!("Found '{}', repository root is '{}'", file, dir);
            return Ok(Some(LocatedFile {
                reader,
                root: dir,
                path: file,
            }));
        }

        let previous = dir;
        dir = path::parent(&previous);
        if dir == previous || dir.len() < path::volume_name_len(&previous) {
            break;
        }
    }

    debug!("No {} found", config.file_name);
    Ok(None)
}

fn entry_kind<F>(fs: &F, name: &str) -> Result<Option<EntryKind>, ResolveError>
where
    F: FileSystem + ?Sized,
{
    match fs.entry_kind(name) {
        Ok(kind) => Ok(Some(kind)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ResolveError::io(name, e)),
    }
}

fn is_dir<F: FileSystem + ?Sized>(fs: &F, name: &str) -> Result<bool, ResolveError> {
    Ok(entry_kind(fs, name)? == Some(EntryKind::Dir))
}

fn is_file<F: FileSystem + ?Sized>(fs: &F, name: &str) -> Result<bool, ResolveError> {
    Ok(entry_kind(fs, name)? == Some(EntryKind::File))
}
