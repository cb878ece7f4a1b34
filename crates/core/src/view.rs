//! Display data for the product grid and cart panel.
//!
//! Views hold already-formatted strings so a front end only has to lay them
//! out.

use serde::Serialize;

use crate::cart::{Cart, LineItem};
use crate::catalog::Product;
use crate::selector::QuantitySelector;
use crate::types::{PriceFormat, ProductId};

/// One card in the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
    /// Value shown between the `−` and `+` buttons.
    pub quantity: u32,
}

impl ProductCardView {
    /// Build the card for `product` with its pending quantity.
    #[must_use]
    pub fn new(product: &Product, selector: &QuantitySelector, format: &PriceFormat) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: format.format_price(product.price),
            image: product.image.clone(),
            quantity: selector.get(product.id).get(),
        }
    }
}

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl CartItemView {
    fn new(line: &LineItem, format: &PriceFormat) -> Self {
        Self {
            id: line.id(),
            name: line.product.name.clone(),
            quantity: line.quantity.get(),
            price: format.format_price(line.price()),
            line_price: format.format(line.subtotal()),
        }
    }
}

/// Cart panel display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    /// Badge count on the floating cart button.
    pub item_count: u32,
}

impl CartView {
    /// Build the panel contents for `cart`.
    #[must_use]
    pub fn new(cart: &Cart, format: &PriceFormat) -> Self {
        Self {
            items: cart.items().map(|line| CartItemView::new(line, format)).collect(),
            total: format.format(cart.total()),
            item_count: cart.item_count(),
        }
    }

    /// Returns `true` when the panel should show its "no products" state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the badge is drawn at all.
    #[must_use]
    pub const fn show_badge(&self) -> bool {
        self.item_count > 0
    }
}
