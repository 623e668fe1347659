//! HTTP route handlers for the wishlist resource.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                - Liveness check
//!
//! # Wishlists (require hybris-tenant / hybris-client headers)
//! GET    /wishlists                           - List wishlists
//! POST   /wishlists                           - Create wishlist
//! GET    /wishlists/{id}                      - Get wishlist
//! PUT    /wishlists/{id}                      - Replace wishlist
//! DELETE /wishlists/{id}                      - Delete wishlist (cascades)
//!
//! # Media sub-resource
//! POST   /wishlists/{id}/media                - Upload media (201 + Location)
//! GET    /wishlists/{id}/media                - List media records
//! DELETE /wishlists/{id}/media/{mediaId}      - Delete media record
//!
//! # Items sub-resource
//! GET    /wishlists/{id}/wishlistItems        - List items
//! POST   /wishlists/{id}/wishlistItems        - Append item
//!
//! # Blob content (public, no caller headers)
//! GET    /media/{tenant}/{mediaId}            - Fetch stored bytes
//! ```

pub mod items;
pub mod media;
pub mod wishlists;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

/// Create the wishlist resource router (mounted under `/wishlists`).
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlists::index).post(wishlists::create))
        .route(
            "/{id}",
            get(wishlists::show)
                .put(wishlists::replace)
                .delete(wishlists::destroy),
        )
        .route("/{id}/media", get(media::index).post(media::upload))
        .route("/{id}/media/{media_id}", delete(media::destroy))
        .route("/{id}/wishlistItems", get(items::index).post(items::create))
}

/// Create all routes for the wishlist service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // Wishlist resource
        .nest("/wishlists", wishlist_routes())
        // Public blob content referenced by media URIs
        .route("/media/{tenant}/{media_id}", get(media::content))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
