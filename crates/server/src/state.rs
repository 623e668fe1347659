//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::{CustomerDirectory, MediaStore, WishlistStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the collaborator stores.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    wishlists: WishlistStore,
    media: MediaStore,
    customers: CustomerDirectory,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The customer directory is seeded from `config.known_customers`.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let customers = CustomerDirectory::new(config.known_customers.iter().cloned());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                wishlists: WishlistStore::new(),
                media: MediaStore::new(),
                customers,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the wishlist store.
    #[must_use]
    pub fn wishlists(&self) -> &WishlistStore {
        &self.inner.wishlists
    }

    /// Get a reference to the media store.
    #[must_use]
    pub fn media(&self) -> &MediaStore {
        &self.inner.media
    }

    /// Get a reference to the customer directory.
    #[must_use]
    pub fn customers(&self) -> &CustomerDirectory {
        &self.inner.customers
    }
}
