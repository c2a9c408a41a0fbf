//! Catalog entry domain type.

use serde::Serialize;

use bookstall_core::{BookId, Email};

/// A book in the shared catalog.
///
/// Created only by the ingestion pipeline, one per accepted row of an
/// uploaded file. Never mutated; lives for the process lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    /// Stable identifier assigned at append time.
    pub id: BookId,
    /// First field of the row, verbatim (no trimming).
    pub title: String,
    /// Second field of the row, verbatim.
    pub author: String,
    /// Third field of the row, verbatim. Kept as text: the upload format
    /// defines no numeric type and no coercion is performed.
    pub price: String,
    /// The authenticated uploader. Always set from the verified token,
    /// never from file content.
    pub seller_email: Email,
}

/// A parsed row that has not yet been committed to the catalog.
///
/// Produced by the ingestion pipeline's parse step; the catalog assigns the
/// id and the pipeline supplies the seller attribution at append time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub price: String,
}
