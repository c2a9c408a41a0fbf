//! Bearer token extractors.
//!
//! Provides extractors for requiring a verified token in route handlers.
//! Token verification happens here, before the handler body runs: an
//! upload handler that takes [`CurrentSeller`] can never see an
//! unauthenticated request.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use bookstall_core::Role;

use crate::error::AppError;
use crate::services::token::{Claims, TokenError};
use crate::state::AppState;

/// Extractor that requires a valid, non-expired seller token.
///
/// Rejections follow the error taxonomy: a missing or non-Bearer
/// `Authorization` header is 401; a malformed, tampered, or expired token
/// is 403; a valid token carrying the user role (a sellerless caller) is
/// also 403.
///
/// # Example
///
/// ```rust,ignore
/// async fn upload(
///     CurrentSeller(claims): CurrentSeller,
/// ) -> impl IntoResponse {
///     format!("upload by {}", claims.sub)
/// }
/// ```
pub struct CurrentSeller(pub Claims);

impl FromRequestParts<AppState> for CurrentSeller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::MissingToken)?;

        let claims = state.tokens().verify(token)?;

        if claims.role != Role::Seller {
            return Err(AppError::Token(TokenError::Invalid));
        }

        Ok(Self(claims))
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
