//! Stable catalog entry identifier.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a book when it is appended to the catalog.
///
/// Ids are sequential starting at 1 and are never reused: the catalog has
/// no deletion path, so a `BookId` stays valid for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// Create an id from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for BookId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<BookId> for u64 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let id = BookId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(u64::from(id), 42);
        assert_eq!(BookId::from(42), id);
    }

    #[test]
    fn test_display() {
        assert_eq!(BookId::new(7).to_string(), "7");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&BookId::new(3)).unwrap();
        assert_eq!(json, "3");
        let id: BookId = serde_json::from_str("3").unwrap();
        assert_eq!(id, BookId::new(3));
    }
}
