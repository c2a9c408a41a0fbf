//! Registration and login route handlers.
//!
//! Four thin wrappers over [`AuthService`] and the token service, one per
//! principal class per operation. Registration never issues a token; login
//! is the only token mint.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use bookstall_core::Role;

use crate::error::Result;
use crate::services::auth::AuthService;
use crate::state::AppState;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Plain message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Register an end user.
pub async fn register_user(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    register(&state, Role::User, &req)
}

/// Register a seller.
pub async fn register_seller(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    register(&state, Role::Seller, &req)
}

/// Login as an end user.
pub async fn login_user(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    login(&state, Role::User, &req)
}

/// Login as a seller.
pub async fn login_seller(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    login(&state, Role::Seller, &req)
}

fn register(
    state: &AppState,
    role: Role,
    req: &RegisterRequest,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let auth = AuthService::new(state.identities());
    let identity = auth.register(role, &req.name, &req.email, &req.password)?;

    tracing::info!(role = %role, email = %identity.email, "identity registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("{role} registered successfully"),
        }),
    ))
}

fn login(state: &AppState, role: Role, req: &LoginRequest) -> Result<Json<TokenResponse>> {
    let auth = AuthService::new(state.identities());
    let identity = auth.login(role, &req.email, &req.password)?;

    let token = state.tokens().issue(&identity.email, role)?;

    tracing::debug!(role = %role, email = %identity.email, "token issued");

    Ok(Json(TokenResponse { token }))
}
