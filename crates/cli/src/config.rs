//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VENTAS_DESTINATION` - Messaging account that receives orders (default: 18492143712)
//! - `VENTAS_MESSAGING_BASE_URL` - Click-to-chat endpoint (default: <https://wa.me>)
//! - `VENTAS_CURRENCY_PREFIX` - Currency prefix for prices (default: RD$)
//! - `VENTAS_LOCALE` - Number locale, `es-DO` or `es-ES` (default: es-DO)

use thiserror::Error;
use url::Url;
use ventas_core::{Destination, NumberLocale, OrderEncoder, PriceFormat};

const DEFAULT_DESTINATION: &str = "18492143712";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Ventas CLI configuration.
#[derive(Debug, Clone)]
pub struct VentasConfig {
    /// Messaging account that receives orders
    pub destination: Destination,
    /// Click-to-chat endpoint base
    pub messaging_base_url: Url,
    /// Price rendering
    pub price_format: PriceFormat,
}

impl VentasConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let destination = Destination::parse(&get_or("VENTAS_DESTINATION", DEFAULT_DESTINATION))
            .map_err(|e| invalid("VENTAS_DESTINATION", &e))?;

        let messaging_base_url = Url::parse(&get_or(
            "VENTAS_MESSAGING_BASE_URL",
            OrderEncoder::DEFAULT_ENDPOINT,
        ))
        .map_err(|e| invalid("VENTAS_MESSAGING_BASE_URL", &e))?;
        if !matches!(messaging_base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "VENTAS_MESSAGING_BASE_URL".to_string(),
                format!("unsupported scheme '{}'", messaging_base_url.scheme()),
            ));
        }
        if messaging_base_url.query().is_some() || messaging_base_url.fragment().is_some() {
            return Err(ConfigError::InvalidEnvVar(
                "VENTAS_MESSAGING_BASE_URL".to_string(),
                "must not contain a query or fragment".to_string(),
            ));
        }

        let locale = get_or("VENTAS_LOCALE", "es-DO")
            .parse::<NumberLocale>()
            .map_err(|e| invalid("VENTAS_LOCALE", &e))?;
        let prefix = get_or("VENTAS_CURRENCY_PREFIX", PriceFormat::DEFAULT_PREFIX);

        Ok(Self {
            destination,
            messaging_base_url,
            price_format: PriceFormat::new(prefix, locale),
        })
    }

    /// Encoder for the configured endpoint and price format.
    #[must_use]
    pub fn encoder(&self) -> OrderEncoder {
        OrderEncoder::new(&self.messaging_base_url, self.price_format.clone())
    }
}

fn invalid(key: &str, err: &impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), err.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<VentasConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        VentasConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.destination.as_str(), "18492143712");
        assert_eq!(config.messaging_base_url.as_str(), "https://wa.me/");
        assert_eq!(config.price_format, PriceFormat::default());
        assert_eq!(config.encoder().endpoint(), "https://wa.me");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("VENTAS_DESTINATION", "+18095550100"),
            ("VENTAS_MESSAGING_BASE_URL", "https://chat.example.test/to"),
            ("VENTAS_CURRENCY_PREFIX", "€"),
            ("VENTAS_LOCALE", "es-ES"),
        ])
        .unwrap();
        assert_eq!(config.destination.as_str(), "18095550100");
        assert_eq!(config.encoder().endpoint(), "https://chat.example.test/to");
        assert_eq!(config.price_format.prefix(), "€");
        assert_eq!(config.price_format.locale(), NumberLocale::EsEs);
    }

    #[test]
    fn test_invalid_destination() {
        let err = load(&[("VENTAS_DESTINATION", "not-a-number")]).unwrap_err();
        assert!(err.to_string().contains("VENTAS_DESTINATION"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(load(&[("VENTAS_MESSAGING_BASE_URL", "no scheme here")]).is_err());
        assert!(load(&[("VENTAS_MESSAGING_BASE_URL", "ftp://wa.me")]).is_err());
    }

    #[test]
    fn test_base_url_with_query_or_fragment_rejected() {
        for base in ["https://wa.me/?a=b", "https://wa.me/#x", "https://wa.me?"] {
            let err = load(&[("VENTAS_MESSAGING_BASE_URL", base)]).unwrap_err();
            assert!(
                matches!(&err, ConfigError::InvalidEnvVar(key, _) if key == "VENTAS_MESSAGING_BASE_URL"),
                "{base}: {err}"
            );
        }
        assert!(load(&[("VENTAS_MESSAGING_BASE_URL", "https://wa.me/send/")]).is_ok());
    }

    #[test]
    fn test_invalid_locale() {
        let err = load(&[("VENTAS_LOCALE", "en-US")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "VENTAS_LOCALE"));
    }
}
