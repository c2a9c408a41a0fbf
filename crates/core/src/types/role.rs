//! Principal classes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The two classes of principal the service knows about.
///
/// Users and sellers live in disjoint collections: the same email may be
/// registered once as a user and once as a seller, independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// End user: can browse the catalog.
    User,
    /// Seller: can additionally upload catalog files.
    Seller,
}

impl Role {
    /// Lowercase name, as used in token claims and route paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Seller => "seller",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
