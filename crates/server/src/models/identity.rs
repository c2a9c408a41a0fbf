//! Identity domain types.

use bookstall_core::Email;

/// A registered principal (user or seller).
///
/// Which collection an identity lives in determines its role; the record
/// itself carries no role field. Identities are never mutated or deleted.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Display name supplied at registration.
    pub name: String,
    /// Email address, the sole key within the role's collection.
    pub email: Email,
    /// Argon2id PHC-format password hash. Never serialized to clients.
    pub password_hash: String,
}
