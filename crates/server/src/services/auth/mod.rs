//! Authentication service.
//!
//! Registration and login for both principal classes, with Argon2id
//! password hashing.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use bookstall_core::{Email, Role};

use crate::models::Identity;
use crate::store::{IdentityStore, StoreError};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Stateless itself; all identity state lives in the [`IdentityStore`].
pub struct AuthService<'a> {
    identities: &'a IdentityStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service over the shared store.
    #[must_use]
    pub const fn new(identities: &'a IdentityStore) -> Self {
        Self { identities }
    }

    /// Register a new identity in the role's collection.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::AlreadyExists` if the email is already
    /// registered in this role's collection.
    pub fn register(
        &self,
        role: Role,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let identity = Identity {
            name: name.to_owned(),
            email,
            password_hash,
        };

        self.identities
            .insert(role, identity.clone())
            .map_err(|e| match e {
                StoreError::DuplicateEmail => AuthError::AlreadyExists,
            })?;

        Ok(identity)
    }

    /// Login with email and password, against the role's collection.
    ///
    /// Unknown emails and wrong passwords are indistinguishable to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is
    /// wrong.
    pub fn login(&self, role: Role, email: &str, password: &str) -> Result<Identity, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let identity = self
            .identities
            .find_by_email(role, &email)
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &identity.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(identity)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
///
/// Never errors: a malformed hash and a mismatch both verify false.
fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("wrong horse", &hash));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        assert!(!verify_password("anything", "not-a-phc-hash"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same password").unwrap();
        let b = hash_password("same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_register_then_login() {
        let store = IdentityStore::new();
        let auth = AuthService::new(&store);

        auth.register(Role::Seller, "Sam", "s@example.com", "hunter22!")
            .unwrap();

        let identity = auth
            .login(Role::Seller, "s@example.com", "hunter22!")
            .unwrap();
        assert_eq!(identity.email.as_str(), "s@example.com");
        assert_eq!(identity.name, "Sam");
    }

    #[test]
    fn test_login_wrong_password() {
        let store = IdentityStore::new();
        let auth = AuthService::new(&store);
        auth.register(Role::User, "U", "u@example.com", "hunter22!")
            .unwrap();

        let err = auth
            .login(Role::User, "u@example.com", "wrong-password")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_login_unknown_email() {
        let store = IdentityStore::new();
        let auth = AuthService::new(&store);

        let err = auth
            .login(Role::User, "nobody@example.com", "whatever1")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_register_duplicate() {
        let store = IdentityStore::new();
        let auth = AuthService::new(&store);
        auth.register(Role::User, "U", "u@example.com", "hunter22!")
            .unwrap();

        let err = auth
            .register(Role::User, "U2", "u@example.com", "hunter23!")
            .unwrap_err();
        assert!(matches!(err, AuthError::AlreadyExists));
    }

    #[test]
    fn test_register_same_email_other_role() {
        let store = IdentityStore::new();
        let auth = AuthService::new(&store);
        auth.register(Role::User, "U", "both@example.com", "hunter22!")
            .unwrap();
        auth.register(Role::Seller, "S", "both@example.com", "hunter22!")
            .unwrap();
    }

    #[test]
    fn test_register_weak_password() {
        let store = IdentityStore::new();
        let auth = AuthService::new(&store);

        let err = auth
            .register(Role::User, "U", "u@example.com", "short")
            .unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
    }

    #[test]
    fn test_register_invalid_email() {
        let store = IdentityStore::new();
        let auth = AuthService::new(&store);

        let err = auth
            .register(Role::User, "U", "not-an-email", "hunter22!")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }
}
