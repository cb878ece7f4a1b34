//! Ventas Core - Cart state machine and order-message encoder.
//!
//! This crate holds everything behind the catalog-and-cart widget:
//! - per-product pending quantities on the product cards
//! - the cart, with merge-on-duplicate-add and exact decimal totals
//! - the order encoder that turns a cart into a click-to-chat link
//!
//! # Architecture
//!
//! The core crate does no I/O. The catalog is handed in by the caller, and
//! the finished order link leaves through the [`UriOpener`] port.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, quantities and destinations
//! - [`catalog`] - Read-only product list
//! - [`selector`] - Pending quantities
//! - [`cart`] - Line items and totals
//! - [`order`] - Order summary and link encoding
//! - [`session`] - One shopper's widget state and the send port
//! - [`view`] - Pre-formatted display data

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod selector;
pub mod session;
pub mod types;
pub mod view;

pub use cart::{Cart, LineItem};
pub use catalog::{Catalog, CatalogError, Product};
pub use order::OrderEncoder;
pub use selector::QuantitySelector;
pub use session::{Session, UriOpener};
pub use types::*;
pub use view::{CartItemView, CartView, ProductCardView};
