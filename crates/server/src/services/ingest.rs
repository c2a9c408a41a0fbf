//! Catalog ingestion pipeline.
//!
//! Turns an uploaded byte stream into catalog entries attributed to the
//! authenticated seller:
//!
//! 1. Spool the bytes to a temporary file ([`UploadSpool`]).
//! 2. Read the spool back and parse newline/comma-delimited rows.
//! 3. Append every accepted row to the catalog as one batch, with
//!    `seller_email` forced to the uploader.
//! 4. Release the spool. The guard releases on every exit path, including
//!    parse failures; a failed release is logged, never surfaced.
//!
//! Row policy: a line with fewer than three comma-separated fields is
//! rejected and counted, not committed with missing fields. Fields beyond
//! the third are ignored. No whitespace trimming, no price coercion.

use std::io::Write;

use tempfile::NamedTempFile;
use thiserror::Error;

use bookstall_core::Email;

use crate::models::NewBook;
use crate::store::Catalog;

/// Errors from the ingestion pipeline.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The upload could not be spooled or read back. Nothing was appended.
    #[error("upload storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Outcome of one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Rows committed to the catalog.
    pub imported: usize,
    /// Malformed rows rejected (fewer than three fields, including empty
    /// lines).
    pub skipped: usize,
}

/// Temporary backing storage for one upload.
///
/// Wraps a [`NamedTempFile`]; dropping the spool removes the file, so every
/// exit path releases the storage. [`UploadSpool::release`] is the explicit
/// happy-path release that can log a failure.
struct UploadSpool {
    file: NamedTempFile,
}

impl UploadSpool {
    /// Spool the uploaded bytes to a fresh temporary file.
    fn write(data: &[u8]) -> std::io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(data)?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Read the spooled bytes back as text.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; the row format is
    /// positional text and a lossy read keeps field boundaries intact.
    fn read_to_string(&self) -> std::io::Result<String> {
        let bytes = std::fs::read(self.file.path())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Release the backing file, logging (not surfacing) any failure.
    fn release(self) {
        if let Err(e) = self.file.close() {
            tracing::warn!(error = %e, "failed to remove upload spool file");
        }
    }
}

/// Parse the uploaded text into rows.
///
/// Returns the accepted rows in file order plus the count of rejected
/// lines.
#[must_use]
pub fn parse_rows(data: &str) -> (Vec<NewBook>, usize) {
    let mut rows = Vec::new();
    let mut skipped = 0;

    for line in data.split('\n') {
        let mut fields = line.split(',');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(title), Some(author), Some(price)) => rows.push(NewBook {
                title: title.to_owned(),
                author: author.to_owned(),
                price: price.to_owned(),
            }),
            _ => skipped += 1,
        }
    }

    (rows, skipped)
}

/// Run the full pipeline for one authenticated upload.
///
/// The caller has already verified the seller's token; `seller` is the
/// claim's subject email and is stamped onto every row regardless of file
/// content.
///
/// # Errors
///
/// Returns [`IngestError::Storage`] if the bytes cannot be spooled or read
/// back. The catalog is untouched in that case.
pub fn ingest(catalog: &Catalog, seller: &Email, data: &[u8]) -> Result<IngestReport, IngestError> {
    let spool = UploadSpool::write(data)?;

    let text = match spool.read_to_string() {
        Ok(text) => text,
        Err(e) => {
            spool.release();
            return Err(e.into());
        }
    };

    let (rows, skipped) = parse_rows(&text);
    let imported = catalog.append_batch(rows, seller);
    spool.release();

    tracing::info!(
        seller = %seller,
        imported,
        skipped,
        "catalog upload processed"
    );

    Ok(IngestReport { imported, skipped })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seller() -> Email {
        Email::parse("s@example.com").unwrap()
    }

    #[test]
    fn test_parse_well_formed_rows() {
        let (rows, skipped) = parse_rows("Dune,Herbert,15\n1984,Orwell,10");
        assert_eq!(skipped, 0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Dune");
        assert_eq!(rows[0].author, "Herbert");
        assert_eq!(rows[0].price, "15");
        assert_eq!(rows[1].title, "1984");
    }

    #[test]
    fn test_parse_rejects_short_rows() {
        let (rows, skipped) = parse_rows("Dune,Herbert,15\nonly-title\nauthorless,row");
        assert_eq!(rows.len(), 1);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_parse_rejects_empty_lines() {
        // A trailing newline yields one empty line, which is malformed.
        let (rows, skipped) = parse_rows("Dune,Herbert,15\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_parse_no_trimming() {
        let (rows, _) = parse_rows(" Dune , Herbert , 15");
        assert_eq!(rows[0].title, " Dune ");
        assert_eq!(rows[0].author, " Herbert ");
        assert_eq!(rows[0].price, " 15");
    }

    #[test]
    fn test_parse_extra_fields_ignored() {
        // No escaping of embedded commas: the fourth field is dropped.
        let (rows, _) = parse_rows("Dune,Herbert,15,hardcover");
        assert_eq!(rows[0].price, "15");
    }

    #[test]
    fn test_parse_price_stays_text() {
        let (rows, _) = parse_rows("Dune,Herbert,fifteen");
        assert_eq!(rows[0].price, "fifteen");
    }

    #[test]
    fn test_ingest_attributes_and_commits_batch() {
        let catalog = Catalog::new();
        let report = ingest(&catalog, &seller(), b"Dune,Herbert,15\n1984,Orwell,10").unwrap();

        assert_eq!(report, IngestReport { imported: 2, skipped: 0 });
        let books = catalog.list_all();
        assert_eq!(books.len(), 2);
        assert!(books.iter().all(|b| b.seller_email == seller()));
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[1].title, "1984");
    }

    #[test]
    fn test_ingest_counts_rejected_rows() {
        let catalog = Catalog::new();
        let report = ingest(&catalog, &seller(), b"Dune,Herbert,15\nbroken\n").unwrap();

        assert_eq!(report, IngestReport { imported: 1, skipped: 2 });
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_ingest_seller_column_cannot_be_injected() {
        // The file format has no seller column; a fourth field is ignored
        // and attribution still comes from the token.
        let catalog = Catalog::new();
        ingest(&catalog, &seller(), b"Dune,Herbert,15,evil@example.com").unwrap();

        let books = catalog.list_all();
        assert_eq!(books[0].seller_email, seller());
    }
}
