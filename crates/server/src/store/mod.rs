//! In-memory collaborators backing the wishlist resource.
//!
//! The resource itself is stateless; persistence and identity resolution
//! are delegated to these stores. The implementations here keep everything
//! in process memory behind `RwLock`s, which is sufficient for the service
//! and its test suite. A production deployment would swap in networked
//! equivalents with the same interfaces.
//!
//! Locks are only ever held for the duration of a single map operation and
//! never across an `.await`.

pub mod customers;
pub mod media;
pub mod wishlists;

pub use customers::CustomerDirectory;
pub use media::MediaStore;
pub use wishlists::WishlistStore;

use thiserror::Error;
use wishlist_core::WishlistId;

/// Errors surfaced by the in-memory stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A wishlist with this identifier already exists in the tenant.
    #[error("wishlist '{0}' already exists")]
    DuplicateWishlist(WishlistId),

    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}
