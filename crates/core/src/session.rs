//! Widget session state.
//!
//! A [`Session`] ties together everything one shopper manipulates: the
//! pending quantities on the product cards, the cart, and whether the cart
//! panel is open. Each method is one discrete user action and runs to
//! completion.
//!
//! Sending an order goes through a [`UriOpener`], the only side effect in
//! this crate. The CLI opener prints the link; a browser front end would
//! navigate to it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cart::{Cart, LineItem};
use crate::catalog::Catalog;
use crate::order::OrderEncoder;
use crate::selector::QuantitySelector;
use crate::types::{Destination, ProductId, Quantity};

/// Port for handing a finished order link to the outside world.
///
/// Fire-and-forget: no acknowledgment is awaited and failures belong to the
/// implementation.
pub trait UriOpener {
    /// Open `uri`.
    fn open(&self, uri: &str);
}

impl<F> UriOpener for F
where
    F: Fn(&str),
{
    fn open(&self, uri: &str) {
        self(uri);
    }
}

/// State of one shopper's catalog-and-cart widget.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    encoder: OrderEncoder,
    destination: Destination,
    selector: QuantitySelector,
    cart: Cart,
    cart_open: bool,
}

impl Session {
    /// Start a session with an empty cart and no pending quantities.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, encoder: OrderEncoder, destination: Destination) -> Self {
        Self {
            catalog,
            encoder,
            destination,
            selector: QuantitySelector::new(),
            cart: Cart::new(),
            cart_open: false,
        }
    }

    /// The catalog this session sells from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The encoder used on confirm.
    #[must_use]
    pub const fn encoder(&self) -> &OrderEncoder {
        &self.encoder
    }

    /// Where confirmed orders go.
    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Pending quantities.
    #[must_use]
    pub const fn selector(&self) -> &QuantitySelector {
        &self.selector
    }

    /// Current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Press `−` (negative `delta`) or `+` (positive `delta`) on a product card.
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) -> Quantity {
        self.selector.adjust(id, delta)
    }

    /// Quantity shown on a product card.
    #[must_use]
    pub fn pending_quantity(&self, id: ProductId) -> Quantity {
        self.selector.get(id)
    }

    /// Press "add" on a product card.
    ///
    /// Adds the card's pending quantity of the product to the cart and returns
    /// the resulting line. An id that is not in the catalog adds nothing.
    /// The pending quantity is left as it is.
    pub fn add_to_cart(&mut self, id: ProductId) -> Option<&LineItem> {
        let Some(product) = self.catalog.get(id) else {
            warn!(product_id = %id, "Ignoring add for product not in catalog");
            return None;
        };

        let quantity = self.selector.get(id);
        self.cart = self.cart.add(product, quantity);
        debug!(
            product_id = %id,
            quantity = %quantity,
            lines = self.cart.len(),
            items = self.cart.item_count(),
            "Added to cart"
        );
        self.cart.get(id)
    }

    /// Show the cart panel.
    pub const fn open_cart(&mut self) {
        self.cart_open = true;
    }

    /// Hide the cart panel.
    pub const fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Whether the cart panel is showing.
    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Press "confirm order".
    ///
    /// With an empty cart nothing happens and `None` is returned. Otherwise
    /// the order link is handed to `opener`, the cart and pending quantities
    /// are cleared, the panel closes, and the link is returned.
    pub fn confirm_order(&mut self, opener: &dyn UriOpener) -> Option<String> {
        let Some(uri) = self.encoder.encode(&self.cart, &self.destination) else {
            debug!("Confirm ignored, cart is empty");
            return None;
        };

        opener.open(&uri);
        info!(
            destination = %self.destination,
            lines = self.cart.len(),
            items = self.cart.item_count(),
            total = %self.cart.total(),
            "Order sent"
        );

        self.cart = self.cart.clear();
        self.selector.clear();
        self.cart_open = false;
        Some(uri)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::Product;
    use crate::types::Price;

    const WIDGET: ProductId = ProductId::new(1);
    const GADGET: ProductId = ProductId::new(2);

    fn session() -> Session {
        let catalog = Catalog::new(vec![
            Product::new(WIDGET, "Widget", Price::from_cents(15_000).unwrap(), ""),
            Product::new(GADGET, "Gadget", Price::from_cents(1999).unwrap(), ""),
        ])
        .unwrap();
        Session::new(
            Arc::new(catalog),
            OrderEncoder::default(),
            Destination::parse("18492143712").unwrap(),
        )
    }

    #[test]
    fn test_add_uses_pending_quantity() {
        let mut s = session();
        s.adjust_quantity(WIDGET, 1);
        s.adjust_quantity(WIDGET, 1);
        let line = s.add_to_cart(WIDGET).unwrap();
        assert_eq!(line.quantity.get(), 3);
        assert_eq!(s.cart().total(), Decimal::new(450, 0));
    }

    #[test]
    fn test_add_defaults_to_one() {
        let mut s = session();
        assert_eq!(s.add_to_cart(GADGET).unwrap().quantity, Quantity::ONE);
    }

    #[test]
    fn test_add_keeps_pending_quantity() {
        let mut s = session();
        s.adjust_quantity(WIDGET, 1);
        s.add_to_cart(WIDGET);
        s.add_to_cart(WIDGET);
        assert_eq!(s.pending_quantity(WIDGET).get(), 2);
        assert_eq!(s.cart().get(WIDGET).unwrap().quantity.get(), 4);
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let mut s = session();
        assert!(s.add_to_cart(ProductId::new(99)).is_none());
        assert!(s.cart().is_empty());
    }

    #[test]
    fn test_confirm_empty_cart_does_not_send() {
        let mut s = session();
        let sent = RefCell::new(Vec::<String>::new());
        let opener = |uri: &str| sent.borrow_mut().push(uri.to_string());
        assert!(s.confirm_order(&opener).is_none());
        assert!(sent.borrow().is_empty());
    }

    #[test]
    fn test_confirm_sends_and_resets() {
        let mut s = session();
        s.adjust_quantity(WIDGET, 2);
        s.add_to_cart(WIDGET);
        s.adjust_quantity(GADGET, 4);
        s.open_cart();

        let sent = RefCell::new(Vec::<String>::new());
        let opener = |uri: &str| sent.borrow_mut().push(uri.to_string());
        let uri = s.confirm_order(&opener).unwrap();

        assert_eq!(sent.borrow().as_slice(), [uri]);
        assert!(s.cart().is_empty());
        assert!(s.selector().is_empty());
        assert!(!s.is_cart_open());
    }

    #[test]
    fn test_second_confirm_is_ignored() {
        let mut s = session();
        s.add_to_cart(WIDGET);
        let count = RefCell::new(0);
        let opener = |_: &str| *count.borrow_mut() += 1;
        assert!(s.confirm_order(&opener).is_some());
        assert!(s.confirm_order(&opener).is_none());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_cart_panel_toggle() {
        let mut s = session();
        assert!(!s.is_cart_open());
        s.open_cart();
        assert!(s.is_cart_open());
        s.close_cart();
        assert!(!s.is_cart_open());
    }
}
