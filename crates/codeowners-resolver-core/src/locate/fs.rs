//! Filesystem abstraction used by the locator.
//!
//! The locator only needs to ask "is this a file or a directory?" and to open
//! a file for reading, so that is all a `FileSystem` provides. Names are
//! slash-separated and relative to the filesystem root, `"."` naming the root.

use super::path;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// What a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Dir,
}

/// A read-only view of a directory tree.
pub trait FileSystem {
    /// Returns the kind of entry at `name`.
    ///
    /// Missing entries must be reported as `io::ErrorKind::NotFound`.
    fn entry_kind(&self, name: &str) -> io::Result<EntryKind>;

    /// Opens the file at `name` for reading.
    fn open(&self, name: &str) -> io::Result<Box<dyn Read + '_>>;
}

/// The real filesystem, rooted at a base directory.
#[derive(Debug, Clone)]
pub struct OsFileSystem {
    base: PathBuf,
}

impl OsFileSystem {
    /// Creates a filesystem whose `"."` is `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Returns the base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Maps a filesystem name onto a real path.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let name = path::clean(name);
        if name == "." {
            self.base.clone()
        } else {
            self.base.join(name)
        }
    }
}

impl FileSystem for OsFileSystem {
    fn entry_kind(&self, name: &str) -> io::Result<EntryKind> {
        let metadata = fs::metadata(self.resolve(name))?;
        Ok(if metadata.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        })
    }

    fn open(&self, name: &str) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(self.resolve(name))?))
    }
}

/// An in-memory filesystem of files; directories are implied by file names.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: BTreeMap<String, Vec<u8>>,
    denied: BTreeSet<String>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given contents.
    pub fn with_file(mut self, name: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path::clean(name), contents.into());
        self
    }

    /// Makes every access to `name` fail with `PermissionDenied`.
    pub fn with_denied(mut self, name: &str) -> Self {
        self.denied.insert(path::clean(name));
        self
    }

    fn check_access(&self, name: &str) -> io::Result<()> {
        if self.denied.contains(name) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("access to '{name}' denied"),
            ));
        }
        Ok(())
    }
}

impl FileSystem for MemoryFileSystem {
    fn entry_kind(&self, name: &str) -> io::Result<EntryKind> {
        let name = path::clean(name);
        self.check_access(&name)?;

        if name == "." {
            return Ok(EntryKind::Dir);
        }
        if self.files.contains_key(&name) {
            return Ok(EntryKind::File);
        }
        let prefix = format!("{name}/");
        if self.files.keys().any(|k| k.starts_with(&prefix)) {
            return Ok(EntryKind::Dir);
        }
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("'{name}' does not exist"),
        ))
    }

    fn open(&self, name: &str) -> io::Result<Box<dyn Read + '_>> {
        let name = path::clean(name);
        self.check_access(&name)?;

        match self.files.get(&name) {
            Some(contents) => Ok(Box::new(contents.as_slice())),
            None if self.entry_kind(&name).is_ok() => {
                Err(io::Error::other(format!("'{name}' is a directory")))
            }
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{name}' does not exist"),
            )),
        }
    }
}
