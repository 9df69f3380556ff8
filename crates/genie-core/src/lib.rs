//! genie core: tag query engine and storage abstraction
//!
//! The query sublanguage is a small boolean grammar over tag names with
//! `and`/`&`, `or`/`|`, `xor`/`^`, `not`/`!` and parentheses. A raw query
//! string is tokenized ([`query::Lexer`]), parsed into an expression tree
//! ([`query::Parser`]), and evaluated against a [`store::TagIndex`] to
//! produce a set of canonical paths.
//!
//! # Example
//!
//! ```rust
//! use genie_core::query;
//! use genie_core::store::{MemoryStore, TagStore};
//!
//! let mut store = MemoryStore::new();
//! store.tag("/home/a/notes.md", "work").unwrap();
//! store.tag("/home/a/todo.md", "work").unwrap();
//! store.tag("/home/a/todo.md", "urgent").unwrap();
//!
//! let paths = query::search("work and urgent", &store).unwrap();
//! assert_eq!(paths.len(), 1);
//! assert!(paths.contains("/home/a/todo.md"));
//! ```

pub mod query;
pub mod store;

pub use query::{Expr, UnparsableQuery};
pub use store::{MemoryStore, StoreError, StoreResult, TagIndex, TagStore};
