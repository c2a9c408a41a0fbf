//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health            - Health check
//!
//! # Registration & login (JSON)
//! POST /register/user     - Register an end user
//! POST /register/seller   - Register a seller
//! POST /login/user        - Login as user, returns a bearer token
//! POST /login/seller      - Login as seller, returns a bearer token
//!
//! # Catalog
//! POST /upload            - Bulk-ingest a catalog file (seller token)
//! GET  /books             - Full catalog, upload order
//! GET  /books/{id}        - Single book by id
//! ```

pub mod auth;
pub mod books;
pub mod upload;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the registration and login routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register/user", post(auth::register_user))
        .route("/register/seller", post(auth::register_seller))
        .route("/login/user", post(auth::login_user))
        .route("/login/seller", post(auth::login_seller))
}

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload::upload))
        .route("/books", get(books::list_books))
        .route("/books/{id}", get(books::get_book))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(catalog_routes())
}
