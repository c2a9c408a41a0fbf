//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::token::TokenService;
use crate::store::{Catalog, IdentityStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Owns the identity and catalog stores
/// explicitly - handlers reach them through this state, never through
/// module-level globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    identities: IdentityStore,
    catalog: Catalog,
    tokens: TokenService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The token service derives its keys from the config's signing secret
    /// here, once, at startup.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let tokens = TokenService::new(&config.token_secret);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                identities: IdentityStore::new(),
                catalog: Catalog::new(),
                tokens,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the identity store.
    #[must_use]
    pub fn identities(&self) -> &IdentityStore {
        &self.inner.identities
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the token service.
    #[must_use]
    pub fn tokens(&self) -> &TokenService {
        &self.inner.tokens
    }
}
