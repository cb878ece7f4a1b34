//! Line-item quantity type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantities start at one.
    #[error("quantity must be at least 1")]
    Zero,
}

/// A positive item quantity.
///
/// ## Constraints
///
/// - Always `>= 1`; there is no upper limit other than `u32::MAX`.
/// - Arithmetic saturates instead of overflowing.
///
/// ## Examples
///
/// ```
/// use ventas_core::Quantity;
///
/// assert_eq!(Quantity::ONE.offset(1).get(), 2);
/// assert_eq!(Quantity::ONE.offset(-1), Quantity::ONE);
/// assert!(Quantity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// The default quantity for a product nobody has touched yet.
    pub const ONE: Self = Self(1);

    /// Create a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] if `value` is 0.
    pub const fn new(value: u32) -> Result<Self, QuantityError> {
        if value == 0 {
            return Err(QuantityError::Zero);
        }
        Ok(Self(value))
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Shift the quantity by `delta`, clamping at 1 and at `u32::MAX`.
    #[must_use]
    pub fn offset(self, delta: i64) -> Self {
        let shifted = i64::from(self.0).saturating_add(delta).max(1);
        Self(u32::try_from(shifted).unwrap_or(u32::MAX))
    }

    /// Add two quantities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
