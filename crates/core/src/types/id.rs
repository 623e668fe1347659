//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use uuid::Uuid;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// Wishlist ids may be assigned by the client, so the wrapped value is an
/// opaque string rather than a numeric key.
///
/// # Example
///
/// ```rust
/// # use wishlist_core::define_id;
/// define_id!(WishlistId);
/// define_id!(MediaId);
///
/// let wishlist_id = WishlistId::new("my-wishlist");
/// let media_id = MediaId::new("my-wishlist");
///
/// // These are different types, so this won't compile:
/// // let _: WishlistId = media_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(WishlistId);
define_id!(MediaId);

impl MediaId {
    /// Generate a fresh server-assigned media ID.
    #[must_use]
    pub fn random() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_matches_inner() {
        let id = WishlistId::new("wl-1234");
        assert_eq!(format!("{id}"), "wl-1234");
        assert_eq!(id.as_str(), "wl-1234");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = WishlistId::new("wl-1234");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"wl-1234\"");

        let parsed: WishlistId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_random_media_ids_are_distinct() {
        let a = MediaId::random();
        let b = MediaId::random();
        assert_ne!(a, b);
    }
}
