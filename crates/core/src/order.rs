//! Order-message encoder.
//!
//! Turns a cart into the click-to-chat link that opens a pre-filled order
//! message for the store's messaging account:
//!
//! ```text
//! <endpoint>/<destination>?text=<percent-encoded summary>
//! ```
//!
//! The encoder is pure. Opening the link is the caller's job (see
//! [`crate::session::UriOpener`]).

use std::fmt::Write as _;

use url::Url;

use crate::cart::Cart;
use crate::types::{Destination, PriceFormat};

/// First line of every order message.
pub const HEADER: &str = "*NUEVO PEDIDO*";

/// Last line of every order message.
pub const TRAILER: &str = "Pedido generado desde la app";

/// Builds order summaries and the links that carry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEncoder {
    endpoint: String,
    format: PriceFormat,
}

impl OrderEncoder {
    /// Click-to-chat base used when nothing else is configured.
    pub const DEFAULT_ENDPOINT: &'static str = "https://wa.me";

    /// Create an encoder for `endpoint` using `format` for prices.
    #[must_use]
    pub fn new(endpoint: &Url, format: PriceFormat) -> Self {
        Self {
            endpoint: endpoint.as_str().trim_end_matches('/').to_string(),
            format,
        }
    }

    /// Messaging endpoint base, without a trailing slash.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Price format used in the summary.
    #[must_use]
    pub const fn price_format(&self) -> &PriceFormat {
        &self.format
    }

    /// The plain-text order summary, or `None` for an empty cart.
    ///
    /// Each line item renders as a bullet with its quantity and unit price,
    /// followed by a blank line; the grand total and trailer close the message.
    #[must_use]
    pub fn summary(&self, cart: &Cart) -> Option<String> {
        if cart.is_empty() {
            return None;
        }

        let mut text = String::new();
        let _ = writeln!(text, "{HEADER}");
        text.push('\n');

        for line in cart.items() {
            let _ = writeln!(text, "• {}", line.product.name);
            let _ = writeln!(text, "  Cantidad: {}", line.quantity);
            let _ = writeln!(text, "  Precio: {}", self.format.format_price(line.price()));
            text.push('\n');
        }

        let _ = writeln!(text, "*TOTAL: {}*", self.format.format(cart.total()));
        text.push('\n');
        text.push_str(TRAILER);

        Some(text)
    }

    /// The complete link for `destination`, or `None` for an empty cart.
    ///
    /// The summary is escaped as a URI component, so newlines become `%0A`.
    #[must_use]
    pub fn encode(&self, cart: &Cart, destination: &Destination) -> Option<String> {
        let summary = self.summary(cart)?;
        Some(format!(
            "{}/{}?text={}",
            self.endpoint,
            destination,
            urlencoding::encode(&summary)
        ))
    }
}

impl Default for OrderEncoder {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            format: PriceFormat::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::types::{NumberLocale, Price, ProductId, Quantity};

    fn widget_cart() -> Cart {
        let widget = Product::new(
            ProductId::new(1),
            "Widget",
            Price::from_cents(15_000).unwrap(),
            "",
        );
        Cart::new().add(&widget, Quantity::new(3).unwrap())
    }

    fn destination() -> Destination {
        Destination::parse("18492143712").unwrap()
    }

    #[test]
    fn test_empty_cart_produces_nothing() {
        let encoder = OrderEncoder::default();
        assert!(encoder.summary(&Cart::new()).is_none());
        assert!(encoder.encode(&Cart::new(), &destination()).is_none());
    }

    #[test]
    fn test_summary_layout() {
        let summary = OrderEncoder::default().summary(&widget_cart()).unwrap();
        let expected = "*NUEVO PEDIDO*\n\
                        \n\
                        • Widget\n  Cantidad: 3\n  Precio: RD$ 150.00\n\
                        \n\
                        *TOTAL: RD$ 450.00*\n\
                        \n\
                        Pedido generado desde la app";
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_encode_builds_link() {
        let uri = OrderEncoder::default()
            .encode(&widget_cart(), &destination())
            .unwrap();
        assert!(uri.starts_with("https://wa.me/18492143712?text="));
        assert!(uri.contains("%0A"));
        assert!(!uri.contains('\n'));
        assert!(!uri.contains(' '));
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let odd = Product::new(
            ProductId::new(5),
            "Café & Té #1?",
            Price::from_cents(100).unwrap(),
            "",
        );
        let cart = Cart::new().add(&odd, Quantity::ONE);
        let uri = OrderEncoder::default().encode(&cart, &destination()).unwrap();
        let (_, query) = uri.split_once("?text=").unwrap();
        assert!(!query.contains('&'));
        assert!(!query.contains('#'));
        assert!(!query.contains('?'));
        let decoded = urlencoding::decode(query).unwrap();
        assert!(decoded.contains("• Café & Té #1?"));
    }

    #[test]
    fn test_custom_endpoint_trailing_slash() {
        let endpoint = Url::parse("https://api.example.test/send/").unwrap();
        let encoder = OrderEncoder::new(&endpoint, PriceFormat::default());
        let uri = encoder.encode(&widget_cart(), &destination()).unwrap();
        assert!(uri.starts_with("https://api.example.test/send/18492143712?text="));
    }

    #[test]
    fn test_summary_uses_locale() {
        let endpoint = Url::parse(OrderEncoder::DEFAULT_ENDPOINT).unwrap();
        let encoder = OrderEncoder::new(&endpoint, PriceFormat::new("RD$", NumberLocale::EsEs));
        let summary = encoder.summary(&widget_cart()).unwrap();
        assert!(summary.contains("*TOTAL: RD$ 450,00*"));
    }
}
