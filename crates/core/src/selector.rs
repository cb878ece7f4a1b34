//! Per-product pending quantities.
//!
//! Each product card carries a `−`/`+` selector. The value it shows is the
//! quantity that the next "add" will put into the cart. Entries are created
//! lazily the first time a product's selector is touched.

use std::collections::HashMap;

use tracing::debug;

use crate::types::{ProductId, Quantity};

/// Pending quantity for every product the user has interacted with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantitySelector {
    pending: HashMap<ProductId, Quantity>,
}

impl QuantitySelector {
    /// Create an empty selector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the pending quantity of `id` by `delta` and return the new value.
    ///
    /// Products without an entry start at 1. The result never drops below 1,
    /// so decrementing at 1 is a no-op. Other entries are untouched.
    pub fn adjust(&mut self, id: ProductId, delta: i64) -> Quantity {
        let updated = self.get(id).offset(delta);
        self.pending.insert(id, updated);
        debug!(product_id = %id, delta, quantity = %updated, "Adjusted pending quantity");
        updated
    }

    /// The pending quantity shown for `id` (1 if never touched).
    #[must_use]
    pub fn get(&self, id: ProductId) -> Quantity {
        self.pending.get(&id).copied().unwrap_or_default()
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Number of products with an explicit entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no product has been touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGET: ProductId = ProductId::new(1);
    const GADGET: ProductId = ProductId::new(2);

    #[test]
    fn test_untouched_product_defaults_to_one() {
        let selector = QuantitySelector::new();
        assert_eq!(selector.get(WIDGET), Quantity::ONE);
        assert!(selector.is_empty());
    }

    #[test]
    fn test_increment_twice() {
        let mut selector = QuantitySelector::new();
        selector.adjust(WIDGET, 1);
        assert_eq!(selector.adjust(WIDGET, 1).get(), 3);
        assert_eq!(selector.get(WIDGET).get(), 3);
    }

    #[test]
    fn test_decrement_never_below_one() {
        let mut selector = QuantitySelector::new();
        assert_eq!(selector.adjust(WIDGET, -1), Quantity::ONE);
        assert_eq!(selector.adjust(WIDGET, -1), Quantity::ONE);
        selector.adjust(WIDGET, 4);
        assert_eq!(selector.adjust(WIDGET, -100), Quantity::ONE);
    }

    #[test]
    fn test_adjust_creates_entry_lazily() {
        let mut selector = QuantitySelector::new();
        selector.adjust(WIDGET, -1);
        assert_eq!(selector.len(), 1);
    }

    #[test]
    fn test_entries_are_independent() {
        let mut selector = QuantitySelector::new();
        selector.adjust(WIDGET, 2);
        selector.adjust(GADGET, 5);
        selector.adjust(WIDGET, -1);
        assert_eq!(selector.get(WIDGET).get(), 2);
        assert_eq!(selector.get(GADGET).get(), 6);
    }

    #[test]
    fn test_clear() {
        let mut selector = QuantitySelector::new();
        selector.adjust(WIDGET, 3);
        selector.clear();
        assert!(selector.is_empty());
        assert_eq!(selector.get(WIDGET), Quantity::ONE);
    }
}
