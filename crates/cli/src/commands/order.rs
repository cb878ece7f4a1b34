//! Build a cart and send it as an order message.
//!
//! Each `--add` replays what a shopper does on a product card: set the
//! quantity selector, then press "add". Adding the same product twice merges
//! into one cart line.
//!
//! # Usage
//!
//! ```bash
//! # Two bags of rice and one coffee, then print the order link
//! ventas order --file crates/cli/data/productos.yaml --add 1x2 --add 4
//!
//! # Show the message without sending it
//! ventas order --file crates/cli/data/productos.yaml --add 1x2 --preview
//! ```

#![allow(clippy::print_stdout)]

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use ventas_core::{CartView, ProductId, Quantity, Session, UriOpener};

use crate::config::VentasConfig;

/// Errors that can occur when parsing an `--add` argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddSpecError {
    #[error("invalid product id '{0}'")]
    InvalidId(String),
    #[error("invalid quantity '{0}' (must be a whole number of at least 1)")]
    InvalidQuantity(String),
}

/// One `--add` argument: `ID` or `IDxQUANTITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddSpec {
    pub id: ProductId,
    pub quantity: Quantity,
}

impl FromStr for AddSpec {
    type Err = AddSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = s
            .split_once(['x', 'X', '*'])
            .map_or((s, None), |(id, qty)| (id, Some(qty)));

        let id = id
            .parse::<ProductId>()
            .map_err(|_| AddSpecError::InvalidId(id.to_string()))?;

        let quantity = match quantity {
            None => Quantity::ONE,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|n| Quantity::new(n).ok())
                .ok_or_else(|| AddSpecError::InvalidQuantity(raw.to_string()))?,
        };

        Ok(Self { id, quantity })
    }
}

/// Opener that prints the link for the user to follow.
struct StdoutOpener;

impl UriOpener for StdoutOpener {
    fn open(&self, uri: &str) {
        info!(uri_len = uri.len(), "Opening order link");
        println!("{uri}");
    }
}

/// Replay the `adds` against a fresh session, show the cart and send it.
///
/// With `preview` set, the order message is printed and nothing is sent.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded.
pub fn run(
    path: &Path,
    adds: &[AddSpec],
    preview: bool,
    config: &VentasConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = super::load_catalog(path)?;
    let mut session = Session::new(
        Arc::new(catalog),
        config.encoder(),
        config.destination.clone(),
    );

    apply_adds(&mut session, adds);
    session.open_cart();
    print_cart(&CartView::new(session.cart(), &config.price_format));

    if preview {
        if let Some(summary) = session.encoder().summary(session.cart()) {
            println!();
            println!("{summary}");
        }
        return Ok(());
    }

    if session.confirm_order(&StdoutOpener).is_none() {
        info!("Nothing to send");
    }
    Ok(())
}

/// Set each product's selector to the requested quantity and press "add".
fn apply_adds(session: &mut Session, adds: &[AddSpec]) {
    for spec in adds {
        let current = i64::from(session.pending_quantity(spec.id).get());
        session.adjust_quantity(spec.id, i64::from(spec.quantity.get()) - current);
        session.add_to_cart(spec.id);
    }
}

fn print_cart(view: &CartView) {
    println!("Mi carrito ({})", view.item_count);
    if view.is_empty() {
        println!("No hay productos");
        return;
    }
    for item in &view.items {
        println!(
            "  {:<40} {:>4} × {:>14}  {:>16}",
            item.name, item.quantity, item.price, item.line_price
        );
    }
    println!("Total: {}", view.total);
}
