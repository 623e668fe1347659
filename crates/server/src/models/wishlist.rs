//! Wishlist entity models.
//!
//! These are the JSON representations exchanged with clients. Wishlists own
//! their items outright; media records are stored separately and joined in
//! by the media routes.

use serde::{Deserialize, Serialize};
use wishlist_core::{MediaId, WishlistId};

/// A named, owned collection of desired products.
///
/// The `id` may be assigned by the client on create. It must be unique
/// within the tenant. The `owner` must resolve against the customer
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wishlist {
    /// Unique identifier within the tenant.
    pub id: WishlistId,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reference to an existing customer identity.
    pub owner: String,
    /// Ordered line items. Always present in responses, possibly empty.
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

/// A single line in a wishlist: a product reference and a quantity.
///
/// Items have no independent lifecycle; they are created and deleted as
/// part of the parent wishlist's item collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistItem {
    /// Product reference.
    pub product: String,
    /// Desired quantity.
    pub amount: u32,
}

/// A binary attachment associated with a wishlist.
///
/// The `id` is server-assigned on upload. The `uri` points at the stored
/// bytes and is fetchable with a bare GET.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistMedia {
    /// Server-assigned media identifier.
    pub id: MediaId,
    /// Absolute URL from which the stored bytes can be retrieved.
    pub uri: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wishlist_deserializes_without_items() {
        let json = r#"{"id": "wl-1", "owner": "customer@example.com"}"#;
        let wishlist: Wishlist = serde_json::from_str(json).unwrap();
        assert_eq!(wishlist.id.as_str(), "wl-1");
        assert!(wishlist.items.is_empty());
        assert!(wishlist.description.is_none());
    }

    #[test]
    fn test_wishlist_serializes_items_even_when_empty() {
        let wishlist = Wishlist {
            id: WishlistId::new("wl-1"),
            description: None,
            owner: "customer@example.com".to_owned(),
            items: Vec::new(),
        };
        let json = serde_json::to_value(&wishlist).unwrap();
        assert!(json["items"].as_array().unwrap().is_empty());
        // Absent description is omitted, not null
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_item_roundtrip() {
        let json = r#"{"product": "Item1", "amount": 1}"#;
        let item: WishlistItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.product, "Item1");
        assert_eq!(item.amount, 1);
    }
}
