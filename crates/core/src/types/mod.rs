//! Core types for Ventas.
//!
//! This module provides type-safe wrappers for product ids, prices and quantities.

pub mod destination;
pub mod id;
pub mod price;
pub mod quantity;

pub use destination::{Destination, DestinationError};
pub use id::ProductId;
pub use price::{LocaleError, NumberLocale, Price, PriceError, PriceFormat};
pub use quantity::{Quantity, QuantityError};
