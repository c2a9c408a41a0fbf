//! The shared ordered catalog.

use std::sync::{PoisonError, RwLock};

use bookstall_core::{BookId, Email};

use crate::models::{Book, NewBook};

#[derive(Debug, Default)]
struct CatalogInner {
    books: Vec<Book>,
    next_id: u64,
}

/// Ordered collection of books, appended to only by the ingestion pipeline.
///
/// Insertion order is preserved across uploads. Each book receives a
/// sequential [`BookId`] (starting at 1) under the append lock, so ids are
/// dense and stable for the process lifetime.
#[derive(Debug, Default)]
pub struct Catalog {
    inner: RwLock<CatalogInner>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of parsed rows, attributing every one to `seller`.
    ///
    /// The whole batch goes in under a single write lock: a concurrent
    /// upload cannot interleave its rows with this one, and readers observe
    /// either none or all of the batch.
    ///
    /// Returns the number of books appended.
    pub fn append_batch(&self, rows: Vec<NewBook>, seller: &Email) -> usize {
        let mut inner = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let appended = rows.len();
        for row in rows {
            inner.next_id += 1;
            let id = BookId::new(inner.next_id);
            inner.books.push(Book {
                id,
                title: row.title,
                author: row.author,
                price: row.price,
                seller_email: seller.clone(),
            });
        }
        appended
    }

    /// Snapshot of the full ordered collection.
    #[must_use]
    pub fn list_all(&self) -> Vec<Book> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .books
            .clone()
    }

    /// Look up a single book by its id.
    #[must_use]
    pub fn get(&self, id: BookId) -> Option<Book> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    /// Number of books in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .books
            .len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
