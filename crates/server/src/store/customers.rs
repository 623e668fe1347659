//! Customer directory.
//!
//! Wishlist owners must reference a resolvable customer. The directory is
//! the identity collaborator the resource consults at create time; here it
//! is a fixed set of known customer ids seeded from configuration.

use std::collections::HashSet;

/// Directory of customer identities a wishlist owner may reference.
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    known: HashSet<String>,
}

impl CustomerDirectory {
    /// Build a directory from a list of known customer ids.
    #[must_use]
    pub fn new(customers: impl IntoIterator<Item = String>) -> Self {
        Self {
            known: customers.into_iter().collect(),
        }
    }

    /// Whether `owner` resolves to a known customer.
    #[must_use]
    pub fn resolve(&self, owner: &str) -> bool {
        self.known.contains(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_customer() {
        let directory = CustomerDirectory::new(["customer@example.com".to_owned()]);
        assert!(directory.resolve("customer@example.com"));
    }

    #[test]
    fn test_resolve_unknown_customer() {
        let directory = CustomerDirectory::new(["customer@example.com".to_owned()]);
        assert!(!directory.resolve("Test"));
    }

    #[test]
    fn test_empty_directory_resolves_nothing() {
        let directory = CustomerDirectory::default();
        assert!(!directory.resolve("customer@example.com"));
    }
}
