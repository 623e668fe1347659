//! In-memory wishlist store.
//!
//! Wishlists are keyed by `(tenant, id)`. The tenant key keeps data from
//! different tenants fully isolated; nothing in the interface allows a
//! caller to reach across tenants.

use std::collections::HashMap;
use std::sync::RwLock;

use wishlist_core::{Tenant, WishlistId};

use super::StoreError;
use crate::models::{Wishlist, WishlistItem};

type WishlistMap = HashMap<(Tenant, WishlistId), Wishlist>;

/// Store for wishlist records.
#[derive(Debug, Default)]
pub struct WishlistStore {
    inner: RwLock<WishlistMap>,
}

impl WishlistStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// List all wishlists belonging to a tenant.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn list(&self, tenant: &Tenant) -> Result<Vec<Wishlist>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map
            .iter()
            .filter(|((t, _), _)| t == tenant)
            .map(|(_, wishlist)| wishlist.clone())
            .collect())
    }

    /// Get a wishlist by id, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn get(&self, tenant: &Tenant, id: &WishlistId) -> Result<Option<Wishlist>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(&(tenant.clone(), id.clone())).cloned())
    }

    /// Whether a wishlist with this id exists in the tenant.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn contains(&self, tenant: &Tenant, id: &WishlistId) -> Result<bool, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.contains_key(&(tenant.clone(), id.clone())))
    }

    /// Insert a new wishlist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateWishlist` if the id is already in use
    /// within the tenant.
    pub fn insert(&self, tenant: &Tenant, wishlist: Wishlist) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let key = (tenant.clone(), wishlist.id.clone());
        if map.contains_key(&key) {
            return Err(StoreError::DuplicateWishlist(wishlist.id));
        }
        map.insert(key, wishlist);
        Ok(())
    }

    /// Replace an existing wishlist wholesale.
    ///
    /// Returns the new representation, or `None` if no wishlist with this
    /// id exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn replace(
        &self,
        tenant: &Tenant,
        id: &WishlistId,
        wishlist: Wishlist,
    ) -> Result<Option<Wishlist>, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let key = (tenant.clone(), id.clone());
        if !map.contains_key(&key) {
            return Ok(None);
        }
        map.insert(key, wishlist.clone());
        Ok(Some(wishlist))
    }

    /// Remove a wishlist, returning the removed record or `None` if absent.
    ///
    /// Media cascade is handled by the caller (the media store does not
    /// know about wishlist lifecycles).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn remove(&self, tenant: &Tenant, id: &WishlistId) -> Result<Option<Wishlist>, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(map.remove(&(tenant.clone(), id.clone())))
    }

    /// Get the item collection of a wishlist, or `None` if the wishlist
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn items(
        &self,
        tenant: &Tenant,
        id: &WishlistId,
    ) -> Result<Option<Vec<WishlistItem>>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map
            .get(&(tenant.clone(), id.clone()))
            .map(|wishlist| wishlist.items.clone()))
    }

    /// Append an item to a wishlist.
    ///
    /// Returns `false` if the wishlist does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if the lock is poisoned.
    pub fn add_item(
        &self,
        tenant: &Tenant,
        id: &WishlistId,
        item: WishlistItem,
    ) -> Result<bool, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        match map.get_mut(&(tenant.clone(), id.clone())) {
            Some(wishlist) => {
                wishlist.items.push(item);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tenant() -> Tenant {
        Tenant::parse("acme").unwrap()
    }

    fn sample(id: &str) -> Wishlist {
        Wishlist {
            id: WishlistId::new(id),
            description: Some("Test".to_owned()),
            owner: "customer@example.com".to_owned(),
            items: Vec::new(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let store = WishlistStore::new();
        store.insert(&tenant(), sample("wl-1")).unwrap();

        let found = store.get(&tenant(), &WishlistId::new("wl-1")).unwrap();
        assert_eq!(found.unwrap().id.as_str(), "wl-1");
    }

    #[test]
    fn test_insert_duplicate_is_rejected() {
        let store = WishlistStore::new();
        store.insert(&tenant(), sample("wl-1")).unwrap();

        let err = store.insert(&tenant(), sample("wl-1")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateWishlist(_)));
    }

    #[test]
    fn test_same_id_in_different_tenants_is_allowed() {
        let store = WishlistStore::new();
        let other = Tenant::parse("globex").unwrap();

        store.insert(&tenant(), sample("wl-1")).unwrap();
        store.insert(&other, sample("wl-1")).unwrap();

        assert_eq!(store.list(&tenant()).unwrap().len(), 1);
        assert_eq!(store.list(&other).unwrap().len(), 1);
    }

    #[test]
    fn test_replace_unknown_id_returns_none() {
        let store = WishlistStore::new();
        let result = store
            .replace(&tenant(), &WishlistId::new("wl-1"), sample("wl-1"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_remove_then_get_returns_none() {
        let store = WishlistStore::new();
        store.insert(&tenant(), sample("wl-1")).unwrap();

        let removed = store.remove(&tenant(), &WishlistId::new("wl-1")).unwrap();
        assert!(removed.is_some());

        let found = store.get(&tenant(), &WishlistId::new("wl-1")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_add_item_appends_in_order() {
        let store = WishlistStore::new();
        store.insert(&tenant(), sample("wl-1")).unwrap();
        let id = WishlistId::new("wl-1");

        let added = store
            .add_item(
                &tenant(),
                &id,
                WishlistItem {
                    product: "Item1".to_owned(),
                    amount: 1,
                },
            )
            .unwrap();
        assert!(added);

        let items = store.items(&tenant(), &id).unwrap().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product, "Item1");
        assert_eq!(items[0].amount, 1);
    }

    #[test]
    fn test_add_item_to_unknown_wishlist() {
        let store = WishlistStore::new();
        let added = store
            .add_item(
                &tenant(),
                &WishlistId::new("missing"),
                WishlistItem {
                    product: "Item1".to_owned(),
                    amount: 1,
                },
            )
            .unwrap();
        assert!(!added);
    }
}
