//! Storage abstraction for tag records
//!
//! The query engine only ever reads through [`TagIndex`]; the write path
//! lives on [`TagStore`]. Implementations:
//!
//! - **Memory**: in-memory storage for testing (`MemoryStore`)
//! - **SQLite**: native SQLite via rusqlite (`genie-sqlite` crate)
//!
//! # Example
//!
//! ```rust
//! use genie_core::store::{MemoryStore, TagStore, TagIndex};
//!
//! let mut store = MemoryStore::new();
//! store.tag("/home/a/notes.md", "work").unwrap();
//!
//! let paths = store.paths_with_tag("work").unwrap();
//! assert!(paths.contains("/home/a/notes.md"));
//! ```

mod error;
mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{TagIndex, TagStore};
