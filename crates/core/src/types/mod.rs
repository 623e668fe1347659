//! Core types for the wishlist service.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod caller;
pub mod id;

pub use caller::{CallerError, ClientId, Tenant};
pub use id::*;
