//! Errors raised while building an ownership table.
//!
//! Queries never fail; only locating and reading the ownership file can.

use std::io;
use std::sync::Arc;
use thiserror::Error;

/// An error that occurred while locating or loading an ownership file.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// No ownership file exists anywhere along the ascent from `start`.
    #[error("no CODEOWNERS found in {start}")]
    NotFound {
        /// The directory the search started from.
        start: String,
    },

    /// A filesystem error other than "not found" while probing or reading.
    #[error("failed to access '{path}': {source}")]
    Io {
        /// The path being probed or read.
        path: String,
        /// The underlying error, shared so the error can be cloned.
        #[source]
        source: Arc<io::Error>,
    },
}

impl ResolveError {
    /// Creates a not-found error for a search starting at `start`.
    pub fn not_found(start: impl Into<String>) -> Self {
        Self::NotFound {
            start: start.into(),
        }
    }

    /// Wraps an I/O error raised while accessing `path`.
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Returns true if no ownership file was found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let error = ResolveError::not_found("src/foo");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "no CODEOWNERS found in src/foo");
    }

    #[test]
    fn io_error_keeps_source() {
        let error = ResolveError::io(
            "docs",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!error.is_not_found());
        assert!(error.to_string().contains("failed to access 'docs'"));
        assert!(std::error::Error::source(&error).is_some());

        let cloned = error.clone();
        assert_eq!(cloned.to_string(), error.to_string());
    }
}
