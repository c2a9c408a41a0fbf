//! Identity collections, one per principal class.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

use bookstall_core::{Email, Role};

use crate::models::Identity;

/// Errors from identity store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An identity with this email already exists in the role's collection.
    #[error("an identity with this email already exists")]
    DuplicateEmail,
}

/// The two disjoint identity collections, keyed by email.
///
/// Email comparison is exact string equality (case-sensitive). The same
/// email may appear once in each collection: user and seller email spaces
/// are independent.
#[derive(Debug, Default)]
pub struct IdentityStore {
    users: RwLock<HashMap<String, Identity>>,
    sellers: RwLock<HashMap<String, Identity>>,
}

impl IdentityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new identity into the role's collection.
    ///
    /// The existence check and the insert happen under one write lock, so
    /// two concurrent registrations for the same email cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateEmail`] if the email is already
    /// registered in this role's collection.
    pub fn insert(&self, role: Role, identity: Identity) -> Result<(), StoreError> {
        let mut collection = self
            .collection(role)
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if collection.contains_key(identity.email.as_str()) {
            return Err(StoreError::DuplicateEmail);
        }
        collection.insert(identity.email.as_str().to_owned(), identity);
        Ok(())
    }

    /// Look up an identity by email within the role's collection.
    ///
    /// Returns a clone so the read lock is released before the caller does
    /// any further work (password verification in particular).
    #[must_use]
    pub fn find_by_email(&self, role: Role, email: &Email) -> Option<Identity> {
        self.collection(role)
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(email.as_str())
            .cloned()
    }

    const fn collection(&self, role: Role) -> &RwLock<HashMap<String, Identity>> {
        match role {
            Role::User => &self.users,
            Role::Seller => &self.sellers,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn identity(email: &str) -> Identity {
        Identity {
            name: "Test".to_owned(),
            email: Email::parse(email).unwrap(),
            password_hash: "$argon2id$fake".to_owned(),
        }
    }

    #[test]
    fn test_insert_and_find() {
        let store = IdentityStore::new();
        store.insert(Role::User, identity("a@example.com")).unwrap();

        let email = Email::parse("a@example.com").unwrap();
        let found = store.find_by_email(Role::User, &email).unwrap();
        assert_eq!(found.email, email);
        assert!(store.find_by_email(Role::Seller, &email).is_none());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = IdentityStore::new();
        store.insert(Role::User, identity("a@example.com")).unwrap();

        let err = store
            .insert(Role::User, identity("a@example.com"))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
    }

    #[test]
    fn test_role_collections_are_independent() {
        let store = IdentityStore::new();
        store.insert(Role::User, identity("a@example.com")).unwrap();
        // Same email registers fine in the other collection.
        store
            .insert(Role::Seller, identity("a@example.com"))
            .unwrap();
    }

    #[test]
    fn test_email_comparison_is_case_sensitive() {
        let store = IdentityStore::new();
        store.insert(Role::User, identity("a@example.com")).unwrap();
        // Different case is a different key.
        store.insert(Role::User, identity("A@example.com")).unwrap();
    }

    #[test]
    fn test_concurrent_registration_single_winner() {
        let store = Arc::new(IdentityStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.insert(Role::Seller, identity("race@example.com")))
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();
        assert_eq!(successes, 1);
    }
}
