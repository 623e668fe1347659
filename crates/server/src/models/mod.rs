//! Wire models for the wishlist resource.

pub mod wishlist;

pub use wishlist::{Wishlist, WishlistItem, WishlistMedia};
