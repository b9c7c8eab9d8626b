//! File-backed store for the book collection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::record::{Book, Fields};

/// On-disk document layout: a single top-level `books` key holding the
/// ordered collection.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    books: Vec<Book>,
}

/// Borrowed view used when writing the document back out.
#[derive(Serialize)]
struct StoreDocumentRef<'a> {
    books: &'a [Book],
}

/// Durable, in-process representation of the book collection.
///
/// The collection is read once at [`open`](Self::open) and held in memory;
/// every mutation rewrites the full document synchronously. The write lock
/// is held across the disk write so concurrent mutations serialize within
/// this process. There is no cross-process coordination; a single service
/// instance owns the file.
#[derive(Debug)]
pub struct BookStore {
    path: PathBuf,
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    /// Open the store backed by the JSON document at `path`.
    ///
    /// A missing file is initialized with an empty collection, persisted
    /// immediately. An unreadable or undecodable file is an error; callers
    /// treat it as fatal and refuse to start.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<BookStore> {
        let path = path.into();
        match fs::read(&path) {
            Ok(bytes) => {
                // An existing but empty file counts as an empty collection.
                let books = if bytes.is_empty() {
                    Vec::new()
                } else {
                    serde_json::from_slice::<StoreDocument>(&bytes)?.books
                };
                tracing::debug!(path = %path.display(), records = books.len(), "store loaded");
                Ok(BookStore {
                    path,
                    books: RwLock::new(books),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let store = BookStore {
                    path,
                    books: RwLock::new(Vec::new()),
                };
                store.persist(&store.books.read())?;
                tracing::debug!(path = %store.path.display(), "store created empty");
                Ok(store)
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// The full collection, insertion order preserved.
    pub fn get_all(&self) -> Vec<Book> {
        self.books.read().clone()
    }

    /// Linear scan for the record with the given id.
    pub fn find_by_id(&self, id: &str) -> StoreResult<Book> {
        self.books
            .read()
            .iter()
            .find(|b| b.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Create a record from client fields: a fresh id is generated (any
    /// client-supplied `id` is discarded), the record is appended, and the
    /// whole document is persisted before returning.
    pub fn insert(&self, fields: Fields) -> StoreResult<Book> {
        let book = Book::create(fields);
        let mut books = self.books.write();
        books.push(book.clone());
        self.persist(&books)?;
        Ok(book)
    }

    /// Shallow-merge `fields` into the record with the given id and
    /// persist. New keys are added, existing keys overwritten, `id`
    /// untouched. The record keeps its position in the collection.
    pub fn update(&self, id: &str, fields: Fields) -> StoreResult<Book> {
        let mut books = self.books.write();
        let book = books
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        book.merge(fields);
        let updated = book.clone();
        self.persist(&books)?;
        Ok(updated)
    }

    /// Remove the record with the given id and persist. Deleting an id
    /// that does not exist is not an error; deletion is idempotent.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut books = self.books.write();
        books.retain(|b| b.id() != id);
        self.persist(&books)
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    /// `true` when the collection has no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path to the backing JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full document to a temporary sibling file, then rename it
    /// over the target so a crash mid-write cannot leave a torn document.
    fn persist(&self, books: &[Book]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(&StoreDocumentRef { books })?;
        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("json");
        let tmp = self.path.with_extension(format!("{ext}.tmp"));
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
