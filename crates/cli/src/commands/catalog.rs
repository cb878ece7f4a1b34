//! Product grid listing.
//!
//! # Usage
//!
//! ```bash
//! ventas catalog --file crates/cli/data/productos.yaml
//! ```

#![allow(clippy::print_stdout)]

use std::path::Path;

use ventas_core::{ProductCardView, QuantitySelector};

use crate::config::VentasConfig;

/// Print every product card with its formatted price.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded.
pub fn list(path: &Path, config: &VentasConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = super::load_catalog(path)?;
    let selector = QuantitySelector::new();

    if catalog.is_empty() {
        println!("No hay productos");
        return Ok(());
    }

    for product in &catalog {
        let card = ProductCardView::new(product, &selector, &config.price_format);
        println!("{:>4}  {:<40} {:>16}  {}", card.id.as_i32(), card.name, card.price, card.image);
    }
    Ok(())
}
