//! Integration tests for Ventas.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ventas-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Quantity, merge and total invariants across modules
//! - `order_scenarios` - End-to-end shopper flows through [`Session`]
//!
//! This library holds the fixtures those tests share.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::RefCell;
use std::sync::Arc;

use ventas_core::{
    Catalog, Destination, OrderEncoder, Price, Product, ProductId, Session, UriOpener,
};

/// Destination used by every fixture session.
pub const TEST_DESTINATION: &str = "18492143712";

/// Build a product from an id, name and price in cents.
///
/// # Panics
///
/// Panics if `cents` is negative.
#[must_use]
pub fn product(id: i32, name: &str, cents: i64) -> Product {
    Product::new(
        ProductId::new(id),
        name,
        Price::from_cents(cents).expect("fixture prices are non-negative"),
        format!("/img/{id}.jpg"),
    )
}

/// A three-product catalog: Widget (150.00), Gadget (19.99), Gizmo (1,250.50).
///
/// # Panics
///
/// Never; fixture ids are unique.
#[must_use]
pub fn sample_catalog() -> Arc<Catalog> {
    let catalog = Catalog::new(vec![
        product(1, "Widget", 15_000),
        product(2, "Gadget", 1999),
        product(3, "Gizmo", 125_050),
    ])
    .expect("fixture ids are unique");
    Arc::new(catalog)
}

/// A session over [`sample_catalog`] with `encoder`.
///
/// # Panics
///
/// Never; the fixture destination is valid.
#[must_use]
pub fn session_with(encoder: OrderEncoder) -> Session {
    Session::new(
        sample_catalog(),
        encoder,
        Destination::parse(TEST_DESTINATION).expect("fixture destination is valid"),
    )
}

/// Opener that remembers every link it was handed.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl RecordingOpener {
    /// Links opened so far, oldest first.
    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UriOpener for RecordingOpener {
    fn open(&self, uri: &str) {
        self.opened.borrow_mut().push(uri.to_string());
    }
}

/// Percent-decode the `text` query value of an order link.
#[must_use]
pub fn decoded_text(uri: &str) -> Option<String> {
    let (_, encoded) = uri.split_once("?text=")?;
    urlencoding::decode(encoded).ok().map(|text| text.into_owned())
}
