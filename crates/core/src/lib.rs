//! Wishlist Core - Shared types library.
//!
//! This crate provides common types used across the wishlist service
//! components:
//! - `server` - HTTP service exposing the wishlist resource
//! - `integration-tests` - Test suite driving the service over HTTP
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and caller metadata

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
