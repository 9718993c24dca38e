use serde::{Deserialize, Serialize};

/// Identifies a product within the session catalog.
/// Ids are positive and unique; the catalog assigns `max + 1` to new products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Creates a ProductId from a raw integer.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
