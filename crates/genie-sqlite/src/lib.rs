//! SQLite storage backend for genie
//!
//! Persists `(host, path, tag, time_created)` records in a single `genie`
//! table and implements the [`genie_core::store::TagStore`] traits on top
//! of it. The database lives at `~/.geniedb` by default.
//!
//! # Example
//!
//! ```rust
//! use genie_core::store::{TagIndex, TagStore};
//! use genie_sqlite::SqliteStore;
//!
//! let mut store = SqliteStore::in_memory().unwrap();
//! store.tag("/home/a/notes.md", "work").unwrap();
//! assert!(store.paths_with_tag("work").unwrap().contains("/home/a/notes.md"));
//! ```

mod error;
mod migrate;
mod store;

pub use error::{Result, SqliteError};
pub use migrate::migrate;
pub use store::SqliteStore;
