//! In-memory catalog of books and authors
//!
//! The store owns both collections and is shared by the GraphQL resolvers as an
//! `Arc<CatalogStore>` injected into the schema. Books keep insertion order; there
//! is no secondary index, so every lookup is a linear scan.

mod error;
pub mod seed;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

pub use error::CatalogError;

/// A book as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Decimal-numeric identifier, unique within the catalog
    pub id: String,
    pub name: String,
    pub genre: String,
    /// Id of the author; not checked against the author list
    pub author: Option<String>,
}

/// An author as held by the store. The author's books are derived from
/// [BookRecord::author] and never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub id: String,
    pub name: String,
    pub age: i32,
}

/// Owner of the book and author collections.
///
/// Authors are fixed at construction. Books only grow, through [CatalogStore::insert_book]
/// or [CatalogStore::append_book].
#[derive(Debug)]
pub struct CatalogStore {
    books: RwLock<Vec<BookRecord>>,
    authors: Vec<AuthorRecord>,
}

impl CatalogStore {
    pub fn new(books: Vec<BookRecord>, authors: Vec<AuthorRecord>) -> Self {
        Self {
            books: RwLock::new(books),
            authors,
        }
    }

    /// Create a store holding the compiled-in seed dataset
    pub fn seeded() -> Self {
        Self::new(seed::books(), seed::authors())
    }

    /// Find a book by id
    pub fn find_book(&self, id: &str) -> Option<BookRecord> {
        self.books.read().iter().find(|b| b.id == id).cloned()
    }

    /// Find an author by id
    pub fn find_author(&self, id: &str) -> Option<AuthorRecord> {
        self.authors.iter().find(|a| a.id == id).cloned()
    }

    /// Snapshot of all books in insertion order
    pub fn books(&self) -> Vec<BookRecord> {
        self.books.read().clone()
    }

    pub fn authors(&self) -> Vec<AuthorRecord> {
        self.authors.clone()
    }

    /// All books referencing `author_id`, in insertion order
    pub fn books_by_author(&self, author_id: &str) -> Vec<BookRecord> {
        self.books
            .read()
            .iter()
            .filter(|b| b.author.as_deref() == Some(author_id))
            .cloned()
            .collect()
    }

    pub fn book_count(&self) -> usize {
        self.books.read().len()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// The id the next inserted book would receive.
    ///
    /// Fails on an empty catalog and on any id that is not a decimal number.
    pub fn next_book_id(&self) -> Result<String, CatalogError> {
        next_id(&self.books.read())
    }

    /// Append a fully formed record. Ids are not checked for uniqueness.
    pub fn append_book(&self, record: BookRecord) {
        self.books.write().push(record);
    }

    /// Allocate the next id and append a new book built from the given fields.
    ///
    /// Id allocation and the append happen under one write lock, so concurrent
    /// inserts never hand out the same id. Nothing is appended on error.
    pub fn insert_book(
        &self,
        name: String,
        genre: String,
        author: Option<String>,
    ) -> Result<BookRecord, CatalogError> {
        self.insert_book_then(name, genre, author, |_| {})
    }

    /// Like [CatalogStore::insert_book], running `on_insert` with the new record
    /// before the write lock is released.
    ///
    /// Successive `on_insert` calls therefore observe records in id order.
    /// `on_insert` must not call back into the store.
    pub fn insert_book_then<F>(
        &self,
        name: String,
        genre: String,
        author: Option<String>,
        on_insert: F,
    ) -> Result<BookRecord, CatalogError>
    where
        F: FnOnce(&BookRecord),
    {
        let mut books = self.books.write();
        let record = BookRecord {
            id: next_id(&books)?,
            name,
            genre,
            author,
        };
        books.push(record.clone());
        on_insert(&record);
        Ok(record)
    }
}

/// Highest numeric id plus one, re-stringified
fn next_id(books: &[BookRecord]) -> Result<String, CatalogError> {
    let mut max: Option<u64> = None;
    for book in books {
        let id = book
            .id
            .parse::<u64>()
            .map_err(|_| CatalogError::MalformedId(book.id.clone()))?;
        max = Some(max.map_or(id, |m| m.max(id)));
    }

    let max = max.ok_or(CatalogError::EmptyCatalog)?;
    max.checked_add(1)
        .map(|id| id.to_string())
        .ok_or(CatalogError::IdSpaceExhausted)
}
