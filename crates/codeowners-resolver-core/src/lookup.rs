//! Read-only ownership lookup for downstream consumers.
//!
//! Code that only needs answers, such as a reporting pipeline annotating
//! resources with their owners, should depend on [`OwnerLookup`] rather than
//! on a concrete table.

use crate::table::OwnershipTable;

/// Answers ownership questions about repository paths.
///
/// Implementations must be idempotent and free of side effects.
pub trait OwnerLookup {
    /// Owners of `path`, in declaration order; empty when nobody owns it.
    fn resolve_owners(&self, path: &str) -> Vec<String>;

    /// Section of the rule deciding `path`; empty when none applies.
    fn resolve_section(&self, path: &str) -> String;
}

impl OwnerLookup for OwnershipTable {
    fn resolve_owners(&self, path: &str) -> Vec<String> {
        self.owners_of(path).to_vec()
    }

    fn resolve_section(&self, path: &str) -> String {
        self.section_of(path).to_string()
    }
}

impl<T: OwnerLookup + ?Sized> OwnerLookup for &T {
    fn resolve_owners(&self, path: &str) -> Vec<String> {
        (**self).resolve_owners(path)
    }

    fn resolve_section(&self, path: &str) -> String {
        (**self).resolve_section(path)
    }
}
