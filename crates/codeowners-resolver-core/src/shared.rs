//! A process-wide ownership table.
//!
//! The first caller builds the table with [`OwnershipTable::from_path`]; every
//! later caller, from any thread, gets that same table (or the same error)
//! regardless of the path it passes.

use crate::error::ResolveError;
use crate::table::OwnershipTable;
use log::debug;
use std::path::Path;
use std::sync::OnceLock;

static SHARED: OnceLock<Result<OwnershipTable, ResolveError>> = OnceLock::new();

/// Returns the process-wide table, building it from `start` on first use.
///
/// Construction runs at most once even under concurrent first access; racing
/// callers block until it finishes and all observe the same outcome.
pub fn shared_table(start: impl AsRef<Path>) -> Result<&'static OwnershipTable, ResolveError> {
    SHARED
        .get_or_init(|| {
            let start = start.as_ref();
            debug!("Building shared ownership table from {:?}", start);
            OwnershipTable::from_path(start)
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Returns the process-wide table if it has been built successfully.
pub fn try_shared_table() -> Option<&'static OwnershipTable> {
    SHARED.get().and_then(|result| result.as_ref().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tempfile::TempDir;

    // The only test in the crate that touches the process-wide table.
    #[test]
    fn built_once_under_concurrent_first_use() {
        let first = TempDir::new().unwrap();
        std::fs::write(first.path().join("CODEOWNERS"), "* @first\n").unwrap();
        let second = TempDir::new().unwrap();
        std::fs::write(second.path().join("CODEOWNERS"), "* @second\n").unwrap();

        let paths = [first.path().to_path_buf(), second.path().to_path_buf()];
        let tables: Vec<&'static OwnershipTable> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let path = paths[i % 2].clone();
                    scope.spawn(move || shared_table(path).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let winner = tables[0];
        assert!(tables.iter().all(|t| std::ptr::eq(*t, winner)));

        let owners = winner.owners_of("anything");
        assert!(owners == ["@first"] || owners == ["@second"]);

        let later = shared_table("/definitely/not/a/repo").unwrap();
        assert!(std::ptr::eq(later, winner));
        assert!(try_shared_table().is_some_and(|t| std::ptr::eq(t, winner)));
    }
}
