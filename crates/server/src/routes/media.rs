//! Media sub-resource route handlers.
//!
//! Uploaded blobs are stored byte-for-byte and served back from a public
//! content URL embedded in each media record. The upload response carries a
//! `Location` header whose last path segment is the new media id.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::instrument;
use wishlist_core::{MediaId, Tenant, WishlistId};

use crate::error::{AppError, Result};
use crate::extract::CallerContext;
use crate::models::WishlistMedia;
use crate::state::AppState;

/// `POST /wishlists/{id}/media` - upload a binary attachment.
#[instrument(skip_all, fields(tenant = %caller.tenant, id = %id, bytes = body.len()))]
pub async fn upload(
    State(state): State<AppState>,
    caller: CallerContext,
    Path(id): Path<WishlistId>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    ensure_wishlist_exists(&state, &caller.tenant, &id)?;

    let media_id = state.media().put(&caller.tenant, &id, body)?;
    let location = absolute_url(
        &state.config().base_url,
        &format!("/wishlists/{id}/media/{media_id}"),
    )?;
    tracing::info!(%media_id, "media uploaded");

    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// `GET /wishlists/{id}/media` - list media records.
///
/// Each record exposes a `uri` from which the stored bytes can be fetched
/// with a bare GET.
pub async fn index(
    State(state): State<AppState>,
    caller: CallerContext,
    Path(id): Path<WishlistId>,
) -> Result<Json<Vec<WishlistMedia>>> {
    ensure_wishlist_exists(&state, &caller.tenant, &id)?;

    let base_url = &state.config().base_url;
    let records = state
        .media()
        .list(&caller.tenant, &id)?
        .into_iter()
        .map(|media_id| {
            let uri = absolute_url(base_url, &format!("/media/{}/{media_id}", caller.tenant))?;
            Ok(WishlistMedia { id: media_id, uri })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Json(records))
}

/// `DELETE /wishlists/{id}/media/{media_id}` - delete a media record.
#[instrument(skip_all, fields(tenant = %caller.tenant, id = %id, media_id = %media_id))]
pub async fn destroy(
    State(state): State<AppState>,
    caller: CallerContext,
    Path((id, media_id)): Path<(WishlistId, MediaId)>,
) -> Result<StatusCode> {
    let removed = state.media().remove(&caller.tenant, &id, &media_id)?;
    if !removed {
        return Err(AppError::NotFound(format!("media '{media_id}'")));
    }
    tracing::info!("media deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /media/{tenant}/{media_id}` - fetch stored bytes.
///
/// This is the public blob route media URIs point at. It requires no
/// caller headers, so the URI is fetchable with a plain GET.
pub async fn content(
    State(state): State<AppState>,
    Path((tenant, media_id)): Path<(Tenant, MediaId)>,
) -> Result<impl IntoResponse> {
    let bytes = state
        .media()
        .fetch(&tenant, &media_id)?
        .ok_or_else(|| AppError::NotFound(format!("media '{media_id}'")))?;

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        bytes,
    ))
}

fn ensure_wishlist_exists(state: &AppState, tenant: &Tenant, id: &WishlistId) -> Result<()> {
    if state.wishlists().contains(tenant, id)? {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("wishlist '{id}'")))
    }
}

/// Join a path onto the configured base URL.
fn absolute_url(base_url: &str, path: &str) -> Result<String> {
    url::Url::parse(base_url)
        .and_then(|base| base.join(path))
        .map(String::from)
        .map_err(|e| AppError::Internal(format!("invalid base url '{base_url}': {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_joins_path() {
        let url = absolute_url("http://127.0.0.1:8080", "/wishlists/wl-1/media/m-1").unwrap();
        assert_eq!(url, "http://127.0.0.1:8080/wishlists/wl-1/media/m-1");
    }

    #[test]
    fn test_absolute_url_rejects_garbage_base() {
        assert!(absolute_url("not a url", "/media/acme/m-1").is_err());
    }
}
