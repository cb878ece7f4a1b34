//! Product identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// Catalog files use plain integers (`"id": 1`), so this is a transparent
/// wrapper around `i32`. Two products in one catalog never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    /// Create a new product ID from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(Self)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
