//! Wishlist CRUD route handlers.

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
use crate::models::Wishlist;
use crate::state::AppState;

/// `GET /wishlists` - list the tenant's wishlists.
pub async fn index(
    State(state): State<AppState>,
    caller: CallerContext,
) -> Result<Json<Vec<Wishlist>>> {
    let wishlists = state.wishlists().list(&caller.tenant)?;
    Ok(Json(wishlists))
}

/// `POST /wishlists` - create a wishlist.
///
/// Rejects unresolvable owners with 400 and duplicate ids with 409.
#[instrument(skip_all, fields(tenant = %caller.tenant, id = %wishlist.id))]
pub async fn create(
    State(state): State<AppState>,
    caller: CallerContext,
    Json(wishlist): Json<Wishlist>,
) -> Result<impl IntoResponse> {
    if !state.customers().resolve(&wishlist.owner) {
        return Err(AppError::BadRequest(format!(
            "owner '{}' does not resolve to a known customer",
            wishlist.owner
        )));
    }

    state.wishlists().insert(&caller.tenant, wishlist.clone())?;
    tracing::info!("wishlist created");

    Ok((StatusCode::CREATED, Json(wishlist)))
}

/// `GET /wishlists/{id}` - get a wishlist by id.
pub async fn show(
    State(state): State<AppState>,
    caller: CallerContext,
    Path(id): Path<WishlistId>,
) -> Result<Json<Wishlist>> {
    let wishlist = state
        .wishlists()
        .get(&caller.tenant, &id)?
        .ok_or_else(|| AppError::NotFound(format!("wishlist '{id}'")))?;
    Ok(Json(wishlist))
}

/// `PUT /wishlists/{id}` - full-document replace.
///
/// The path id is authoritative; the stored record always carries it.
pub async fn replace(
    State(state): State<AppState>,
    caller: CallerContext,
    Path(id): Path<WishlistId>,
    Json(mut wishlist): Json<Wishlist>,
) -> Result<Json<Wishlist>> {
    wishlist.id = id.clone();
    let replaced = state
        .wishlists()
        .replace(&caller.tenant, &id, wishlist)?
        .ok_or_else(|| AppError::NotFound(format!("wishlist '{id}'")))?;
    Ok(Json(replaced))
}

/// `DELETE /wishlists/{id}` - delete a wishlist.
///
/// Deletion cascades to the wishlist's media; items are part of the record
/// and disappear with it.
#[instrument(skip_all, fields(tenant = %caller.tenant, id = %id))]
pub async fn destroy(
    State(state): State<AppState>,
    caller: CallerContext,
    Path(id): Path<WishlistId>,
) -> Result<StatusCode> {
    state
        .wishlists()
        .remove(&caller.tenant, &id)?
        .ok_or_else(|| AppError::NotFound(format!("wishlist '{id}'")))?;
    state.media().remove_all(&caller.tenant, &id)?;
    tracing::info!("wishlist deleted");

    Ok(StatusCode::NO_CONTENT)
}
