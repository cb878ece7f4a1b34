//! Cart of line items.
//!
//! A cart holds at most one line per product, in the order products were
//! first added. Adding a product that is already present bumps the quantity
//! of its existing line instead of appending a second one.
//!
//! Carts are values: [`Cart::add`] returns a new cart and leaves the original
//! untouched.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId, Quantity};

/// A product snapshot plus the chosen quantity.
///
/// The snapshot is taken when the product is first added. Re-adding only
/// changes `quantity`; name, price and image stay as they were.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "cantidad")]
    pub quantity: Quantity,
}

impl LineItem {
    /// Product id of this line.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price captured at add time.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.product.price
    }

    /// `price * quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.price.times(self.quantity)
    }
}

/// Ordered, id-unique collection of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: IndexMap<ProductId, LineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a cart with `quantity` more of `product`.
    ///
    /// An existing line for `product.id` keeps its position and snapshot and
    /// has its quantity increased (saturating). Otherwise a new line is
    /// appended.
    #[must_use]
    pub fn add(&self, product: &Product, quantity: Quantity) -> Self {
        let mut lines = self.lines.clone();
        lines
            .entry(product.id)
            .and_modify(|line| line.quantity = line.quantity.saturating_add(quantity))
            .or_insert_with(|| LineItem {
                product: product.clone(),
                quantity,
            });
        Self { lines }
    }

    /// Sum of `price * quantity` over all lines, without rounding.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .values()
            .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.subtotal()))
    }

    /// Sum of all quantities (the cart badge count). Zero when empty.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .values()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity.get()))
    }

    /// An empty cart.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.lines.get(&id)
    }

    /// Zero-based position of the line for `id`.
    #[must_use]
    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.get_index_of(&id)
    }

    /// Lines in first-insertion order.
    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.lines.values()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
