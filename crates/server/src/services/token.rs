//! Bearer token issuance and verification.
//!
//! Tokens are self-contained HS256 JWTs signed with the process-wide secret
//! from [`crate::config::ServerConfig`]. Nothing is stored server-side:
//! validity is determined purely by the signature and the expiry claim, so
//! a token cannot be revoked before its natural expiry and rotating the
//! secret invalidates every outstanding token.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bookstall_core::{Email, Role};

/// Fixed token lifetime: one hour from issuance.
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

/// Errors from token operations.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token's expiry claim is in the past.
    #[error("token expired")]
    Expired,

    /// Bad signature or structurally malformed token.
    #[error("invalid token")]
    Invalid,

    /// Signing failed. Surfaced as an internal error.
    #[error("token encoding failed")]
    Encode,
}

/// Claims embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject email of the authenticated identity.
    pub sub: String,
    /// Which principal class the identity belongs to.
    pub role: Role,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiry (seconds since epoch).
    pub exp: i64,
}

/// Issues and verifies bearer tokens.
///
/// The keys are derived once from the signing secret at startup.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the process-wide signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        // The 1h lifetime is the contract; no leeway past the boundary.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation,
        }
    }

    /// Issue a token for an authenticated identity.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encode`] if signing fails.
    pub fn issue(&self, email: &Email, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.as_str().to_owned(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_LIFETIME_SECS)).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|_| TokenError::Encode)
    }

    /// Verify a token string and return its embedded claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Expired`] past the expiry boundary, or
    /// [`TokenError::Invalid`] for a bad signature or malformed token.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}
