//! Catalog query route handlers.
//!
//! Unauthenticated read surface over the shared catalog.

use axum::{
    Json,
    extract::{Path, State},
};

use bookstall_core::BookId;

use crate::error::{AppError, Result};
use crate::models::Book;
use crate::state::AppState;

/// List the full catalog in upload order.
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.catalog().list_all())
}

/// Fetch a single book by its id.
pub async fn get_book(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Book>> {
    state
        .catalog()
        .get(BookId::new(id))
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Book".to_owned()))
}
