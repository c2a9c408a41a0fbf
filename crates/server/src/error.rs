//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures internal errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`; every failure body is `{"error": "..."}` and no
//! error crosses a handler boundary unhandled.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::services::ingest::IngestError;
use crate::services::token::TokenError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Token verification failed.
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// Ingestion pipeline failed.
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// No bearer token on a request that requires one.
    #[error("missing bearer token")]
    MissingToken,

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::AlreadyExists
                | AuthError::InvalidEmail(_)
                | AuthError::WeakPassword(_) => StatusCode::BAD_REQUEST,
                AuthError::PasswordHash => StatusCode::INTERNAL_SERVER_ERROR,
            },
            // Invalid and expired tokens both deny an authenticated surface.
            Self::Token(TokenError::Expired | TokenError::Invalid) => StatusCode::FORBIDDEN,
            Self::Token(TokenError::Encode) | Self::Ingest(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Client-facing message. Internal details are not exposed.
    fn message(&self) -> String {
        match self {
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid credentials".to_owned(),
                AuthError::AlreadyExists => {
                    "An account with this email already exists".to_owned()
                }
                AuthError::InvalidEmail(e) => format!("Invalid email: {e}"),
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::PasswordHash => "Internal server error".to_owned(),
            },
            Self::Token(TokenError::Expired) => "Token expired".to_owned(),
            Self::Token(TokenError::Invalid) => "Invalid token".to_owned(),
            Self::Token(TokenError::Encode) | Self::Ingest(_) | Self::Internal(_) => {
                "Internal server error".to_owned()
            }
            Self::MissingToken => "Missing bearer token".to_owned(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::BadRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.status() == StatusCode::INTERNAL_SERVER_ERROR {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = Json(json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
