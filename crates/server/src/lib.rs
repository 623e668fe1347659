//! Wishlist server library.
//!
//! This crate provides the wishlist service as a library, allowing it to
//! be tested in-process and reused by the integration test suite.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use axum::{Router, extract::DefaultBodyLimit};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router.
///
/// The body limit from configuration caps media uploads; JSON payloads are
/// far below it in practice.
#[must_use]
pub fn app(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config().max_upload_bytes);

    routes::routes()
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
