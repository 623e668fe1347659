//! Caller metadata types: tenant and client identifiers.
//!
//! Every wishlist request carries two headers identifying the caller:
//! the tenant (which organization's data the request operates on) and the
//! client (which application within that tenant is calling). Both are
//! validated on the way in so the rest of the service can treat them as
//! well-formed.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Tenant`] or [`ClientId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CallerError {
    /// The input string is empty.
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    /// The input string is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Which field failed validation.
        field: &'static str,
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside the allowed set.
    #[error("{field} contains invalid character '{ch}'")]
    InvalidCharacter {
        /// Which field failed validation.
        field: &'static str,
        /// The offending character.
        ch: char,
    },
}

/// A tenant identifier.
///
/// Tenants are the isolation boundary for wishlist data. Identifiers are
/// lowercase alphanumeric, up to 32 characters.
///
/// ## Examples
///
/// ```
/// use wishlist_core::Tenant;
///
/// assert!(Tenant::parse("acme").is_ok());
/// assert!(Tenant::parse("shop42").is_ok());
///
/// assert!(Tenant::parse("").is_err());       // empty
/// assert!(Tenant::parse("Acme").is_err());   // uppercase
/// assert!(Tenant::parse("a b").is_err());    // whitespace
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Tenant(String);

impl Tenant {
    /// Maximum length of a tenant identifier.
    pub const MAX_LENGTH: usize = 32;

    /// Parse a `Tenant` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 32 characters,
    /// or contains anything other than lowercase ASCII letters and digits.
    pub fn parse(s: &str) -> Result<Self, CallerError> {
        validate("tenant", s, Self::MAX_LENGTH, |c| {
            c.is_ascii_lowercase() || c.is_ascii_digit()
        })?;
        Ok(Self(s.to_owned()))
    }

    /// Returns the tenant identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Tenant` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A client identifier.
///
/// Identifies the calling application within a tenant, e.g. `acme.wishlist`.
/// Allowed characters are ASCII alphanumerics plus `.`, `-`, and `_`,
/// up to 64 characters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Maximum length of a client identifier.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `ClientId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 64 characters,
    /// or contains a character outside `[A-Za-z0-9._-]`.
    pub fn parse(s: &str) -> Result<Self, CallerError> {
        validate("client", s, Self::MAX_LENGTH, |c| {
            c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')
        })?;
        Ok(Self(s.to_owned()))
    }

    /// Returns the client identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate(
    field: &'static str,
    s: &str,
    max: usize,
    allowed: impl Fn(char) -> bool,
) -> Result<(), CallerError> {
    if s.is_empty() {
        return Err(CallerError::Empty(field));
    }
    if s.len() > max {
        return Err(CallerError::TooLong { field, max });
    }
    if let Some(ch) = s.chars().find(|&c| !allowed(c)) {
        return Err(CallerError::InvalidCharacter { field, ch });
    }
    Ok(())
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Tenant {
    type Err = CallerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::str::FromStr for ClientId {
    type Err = CallerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Tenant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
