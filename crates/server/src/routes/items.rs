//! Wishlist items sub-resource route handlers.
//!
//! Items are owned by the wishlist record; these routes read and append to
//! the parent's item collection.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::instrument;
use wishlist_core::WishlistId;

use crate::error::{AppError, Result};
use crate::extract::CallerContext;
use crate::models::WishlistItem;
use crate::state::AppState;

/// `GET /wishlists/{id}/wishlistItems` - list items.
///
/// The collection is always an array, possibly empty, never absent.
pub async fn index(
    State(state): State<AppState>,
    caller: CallerContext,
    Path(id): Path<WishlistId>,
) -> Result<Json<Vec<WishlistItem>>> {
    let items = state
        .wishlists()
        .items(&caller.tenant, &id)?
        .ok_or_else(|| AppError::NotFound(format!("wishlist '{id}'")))?;
    Ok(Json(items))
}

/// `POST /wishlists/{id}/wishlistItems` - append an item.
#[instrument(skip_all, fields(tenant = %caller.tenant, id = %id, product = %item.product))]
pub async fn create(
    State(state): State<AppState>,
    caller: CallerContext,
    Path(id): Path<WishlistId>,
    Json(item): Json<WishlistItem>,
) -> Result<impl IntoResponse> {
    let added = state.wishlists().add_item(&caller.tenant, &id, item.clone())?;
    if !added {
        return Err(AppError::NotFound(format!("wishlist '{id}'")));
    }
    tracing::info!("item appended");

    Ok((StatusCode::CREATED, Json(item)))
}
