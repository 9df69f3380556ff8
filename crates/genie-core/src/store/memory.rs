//! In-memory storage backend
//!
//! A simple HashMap-based implementation for testing and development.
//! Not suitable for production use due to lack of persistence.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::store::error::StoreResult;
use crate::store::traits::{TagIndex, TagStore};

/// In-memory tag store.
///
/// Maps each path to its tag set. Useful for:
/// - Unit testing the query evaluator
/// - Development/prototyping
#[derive(Debug, Default)]
pub struct MemoryStore {
    tags_by_path: HashMap<String, BTreeSet<String>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            tags_by_path: HashMap::new(),
        }
    }

    /// Create a memory store pre-populated with `(path, tag)` records.
    pub fn with_records<'a>(records: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut store = Self::new();
        for (path, tag) in records {
            let _ = store.tag(path, tag);
        }
        store
    }

    /// Number of distinct tagged paths (for testing).
    pub fn len(&self) -> usize {
        self.tags_by_path.len()
    }

    /// Whether the store has no records.
    pub fn is_empty(&self) -> bool {
        self.tags_by_path.is_empty()
    }
}

impl TagIndex for MemoryStore {
    fn paths_with_tag(&self, tag: &str) -> StoreResult<HashSet<String>> {
        Ok(self
            .tags_by_path
            .iter()
            .filter(|(_, tags)| tags.contains(tag))
            .map(|(path, _)| path.clone())
            .collect())
    }

    fn all_paths(&self) -> StoreResult<HashSet<String>> {
        Ok(self.tags_by_path.keys().cloned().collect())
    }
}

impl TagStore for MemoryStore {
    fn tag(&mut self, path: &str, tag: &str) -> StoreResult<()> {
        self.tags_by_path
            .entry(path.to_string())
            .or_default()
            .insert(tag.to_string());
        Ok(())
    }

    fn untag(&mut self, path: &str, tag: &str) -> StoreResult<bool> {
        let Some(tags) = self.tags_by_path.get_mut(path) else {
            return Ok(false);
        };
        let removed = tags.remove(tag);
        if tags.is_empty() {
            self.tags_by_path.remove(path);
        }
        Ok(removed)
    }

    fn tags_for_path(&self, path: &str) -> StoreResult<Vec<String>> {
        Ok(self
            .tags_by_path
            .get(path)
            .map(|tags| tags.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn all_tags(&self) -> StoreResult<Vec<String>> {
        let mut tags: BTreeSet<String> = BTreeSet::new();
        for path_tags in self.tags_by_path.values() {
            tags.extend(path_tags.iter().cloned());
        }
        Ok(tags.into_iter().collect())
    }
}
