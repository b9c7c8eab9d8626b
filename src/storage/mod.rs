//! # Record Store
//!
//! File-backed storage for the book collection.
//!
//! The collection lives in a single JSON document with one top-level
//! `books` key. It is loaded once when the store is opened; every mutation
//! rewrites the full document synchronously. Acceptable because the
//! collection is expected to stay small and exactly one service instance
//! owns the file.

mod errors;
mod record;
mod store;

pub use errors::{StoreError, StoreResult};
pub use record::{generate_id, Book, Fields, ID_FIELD, ID_LEN};
pub use store::BookStore;
