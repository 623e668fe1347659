//! In-memory media store.
//!
//! Stands in for the external media repository: uploads are stored as-is
//! and served back byte-for-byte. Records are tracked per wishlist so that
//! wishlist deletion can cascade, while blobs are addressable by
//! `(tenant, media id)` alone so the content URL needs no caller headers.

use std::collections::HashMap;
use std::sync::RwLock;

use bytes::Bytes;
use wishlist_core::{MediaId, Tenant, WishlistId};

use super::StoreError;

#[derive(Debug, Default)]
struct MediaMaps {
    /// Blob content keyed by `(tenant, media id)`.
    blobs: HashMap<(Tenant, MediaId), Bytes>,
    /// Media ids per wishlist, in upload order.
    by_wishlist: HashMap<(Tenant, WishlistId), Vec<MediaId>>,
}

/// Store for wishlist media attachments.
#[derive(Debug, Default)]
pub struct MediaStore {
    inner: RwLock<MediaMaps>,
}

impl MediaStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an uploaded blob, returning its server-assigned id.
    ///
    /// Every upload creates a new record; identical content is not
    /// deduplicated.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn put(
        &self,
        tenant: &Tenant,
        wishlist_id: &WishlistId,
        content: Bytes,
    ) -> Result<MediaId, StoreError> {
        let media_id = MediaId::random();
        let mut maps = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        maps.blobs
            .insert((tenant.clone(), media_id.clone()), content);
        maps.by_wishlist
            .entry((tenant.clone(), wishlist_id.clone()))
            .or_default()
            .push(media_id.clone());
        Ok(media_id)
    }

    /// List the media ids attached to a wishlist, in upload order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn list(
        &self,
        tenant: &Tenant,
        wishlist_id: &WishlistId,
    ) -> Result<Vec<MediaId>, StoreError> {
        let maps = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(maps
            .by_wishlist
            .get(&(tenant.clone(), wishlist_id.clone()))
            .cloned()
            .unwrap_or_default())
    }

    /// Fetch the stored bytes for a media id, or `None` if unknown.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn fetch(&self, tenant: &Tenant, media_id: &MediaId) -> Result<Option<Bytes>, StoreError> {
        let maps = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(maps.blobs.get(&(tenant.clone(), media_id.clone())).cloned())
    }

    /// Remove a single media record, returning `false` if it was not
    /// attached to this wishlist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn remove(
        &self,
        tenant: &Tenant,
        wishlist_id: &WishlistId,
        media_id: &MediaId,
    ) -> Result<bool, StoreError> {
        let mut maps = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let key = (tenant.clone(), wishlist_id.clone());
        let Some(ids) = maps.by_wishlist.get_mut(&key) else {
            return Ok(false);
        };
        let Some(pos) = ids.iter().position(|id| id == media_id) else {
            return Ok(false);
        };
        ids.remove(pos);
        if ids.is_empty() {
            maps.by_wishlist.remove(&key);
        }
        maps.blobs.remove(&(tenant.clone(), media_id.clone()));
        Ok(true)
    }

    /// Remove all media attached to a wishlist. Cascade hook for wishlist
    /// deletion; removing media for an unknown wishlist is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn remove_all(&self, tenant: &Tenant, wishlist_id: &WishlistId) -> Result<(), StoreError> {
        let mut maps = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        if let Some(ids) = maps
            .by_wishlist
            .remove(&(tenant.clone(), wishlist_id.clone()))
        {
            for media_id in ids {
                maps.blobs.remove(&(tenant.clone(), media_id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tenant() -> Tenant {
        Tenant::parse("acme").unwrap()
    }

    fn wishlist_id() -> WishlistId {
        WishlistId::new("wl-1")
    }

    #[test]
    fn test_put_then_fetch_returns_identical_bytes() {
        let store = MediaStore::new();
        let content = Bytes::from_static(b"\x89PNG\r\n\x1a\nfake image bytes");

        let media_id = store.put(&tenant(), &wishlist_id(), content.clone()).unwrap();
        let fetched = store.fetch(&tenant(), &media_id).unwrap().unwrap();
        assert_eq!(fetched, content);
    }

    #[test]
    fn test_list_preserves_upload_order() {
        let store = MediaStore::new();
        let first = store
            .put(&tenant(), &wishlist_id(), Bytes::from_static(b"one"))
            .unwrap();
        let second = store
            .put(&tenant(), &wishlist_id(), Bytes::from_static(b"two"))
            .unwrap();

        let listed = store.list(&tenant(), &wishlist_id()).unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[test]
    fn test_remove_detaches_and_drops_blob() {
        let store = MediaStore::new();
        let media_id = store
            .put(&tenant(), &wishlist_id(), Bytes::from_static(b"bytes"))
            .unwrap();

        assert!(store.remove(&tenant(), &wishlist_id(), &media_id).unwrap());
        assert!(store.list(&tenant(), &wishlist_id()).unwrap().is_empty());
        assert!(store.fetch(&tenant(), &media_id).unwrap().is_none());
    }

    #[test]
    fn test_remove_unknown_media_returns_false() {
        let store = MediaStore::new();
        let removed = store
            .remove(&tenant(), &wishlist_id(), &MediaId::random())
            .unwrap();
        assert!(!removed);
    }

    #[test]
    fn test_remove_all_cascades() {
        let store = MediaStore::new();
        let a = store
            .put(&tenant(), &wishlist_id(), Bytes::from_static(b"a"))
            .unwrap();
        let b = store
            .put(&tenant(), &wishlist_id(), Bytes::from_static(b"b"))
            .unwrap();

        store.remove_all(&tenant(), &wishlist_id()).unwrap();

        assert!(store.list(&tenant(), &wishlist_id()).unwrap().is_empty());
        assert!(store.fetch(&tenant(), &a).unwrap().is_none());
        assert!(store.fetch(&tenant(), &b).unwrap().is_none());
    }

    #[test]
    fn test_tenants_are_isolated() {
        let store = MediaStore::new();
        let other = Tenant::parse("globex").unwrap();
        let media_id = store
            .put(&tenant(), &wishlist_id(), Bytes::from_static(b"bytes"))
            .unwrap();

        assert!(store.fetch(&other, &media_id).unwrap().is_none());
    }
}
