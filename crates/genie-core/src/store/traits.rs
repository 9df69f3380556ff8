//! Storage trait definitions

use std::collections::HashSet;

use crate::store::error::StoreResult;

/// Read-side query interface over the tag store.
///
/// This is everything the query evaluator needs: lookups by tag and the
/// universe of known paths (for `not`). Path strings are canonical; the
/// normalization that produces them happens in the caller, not here.
pub trait TagIndex {
    /// All distinct canonical paths currently bearing exactly this tag
    /// name. Empty set if the tag is unknown; never an error.
    fn paths_with_tag(&self, tag: &str) -> StoreResult<HashSet<String>>;

    /// All distinct canonical paths with at least one tag recorded.
    fn all_paths(&self) -> StoreResult<HashSet<String>>;
}

/// Full read/write interface over the tag store.
pub trait TagStore: TagIndex {
    /// Record a tag on a path.
    ///
    /// Duplicate records are allowed; the store inserts blindly and the
    /// read side deduplicates.
    fn tag(&mut self, path: &str, tag: &str) -> StoreResult<()>;

    /// Remove a tag from a path.
    ///
    /// Returns `true` if any record was removed; removing an absent tag is
    /// not an error.
    fn untag(&mut self, path: &str, tag: &str) -> StoreResult<bool>;

    /// All distinct tags on a path, sorted. Empty for an untagged path.
    fn tags_for_path(&self, path: &str) -> StoreResult<Vec<String>>;

    /// All distinct tags in the store, sorted.
    fn all_tags(&self) -> StoreResult<Vec<String>>;
}
