//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept as exact [`Decimal`] values all the way through cart
//! totals. Rounding to two places happens only in [`PriceFormat::format`].

use core::{fmt, iter};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::Quantity;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative unit price in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from an integer number of cents.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `cents` is below zero.
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// The exact amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Exact `price * quantity`, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Decimal {
        self.0.saturating_mul(Decimal::from(quantity.get()))
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Errors that can occur when parsing a [`NumberLocale`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The tag is not one of the supported locales.
    #[error("unsupported locale: {0}")]
    Unsupported(String),
}

/// Digit grouping and decimal separator conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberLocale {
    /// Dominican Spanish: `1,234.50`.
    #[default]
    EsDo,
    /// Peninsular Spanish: `1234,50` and `12.345,50`.
    EsEs,
}

impl NumberLocale {
    /// Separator placed between groups of three integer digits.
    #[must_use]
    pub const fn grouping_separator(self) -> char {
        match self {
            Self::EsDo => ',',
            Self::EsEs => '.',
        }
    }

    /// Separator placed before the fractional digits.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EsDo => '.',
            Self::EsEs => ',',
        }
    }

    /// Fewest digits the leading group may hold before grouping applies.
    ///
    /// `es-ES` leaves four-digit amounts ungrouped.
    #[must_use]
    pub const fn min_grouping_digits(self) -> usize {
        match self {
            Self::EsDo => 1,
            Self::EsEs => 2,
        }
    }
}

impl fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EsDo => write!(f, "es-DO"),
            Self::EsEs => write!(f, "es-ES"),
        }
    }
}

impl std::str::FromStr for NumberLocale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "es-do" => Ok(Self::EsDo),
            "es-es" => Ok(Self::EsEs),
            _ => Err(LocaleError::Unsupported(s.to_string())),
        }
    }
}

/// Renders amounts as `<prefix> <digits>` with exactly two decimals.
///
/// ```
/// use rust_decimal::Decimal;
/// use ventas_core::{NumberLocale, PriceFormat};
///
/// let rd = PriceFormat::default();
/// assert_eq!(rd.format(Decimal::new(123_450, 2)), "RD$ 1,234.50");
///
/// let es = PriceFormat::new("RD$", NumberLocale::EsEs);
/// assert_eq!(es.format(Decimal::new(123_450, 2)), "RD$ 1234,50");
/// assert_eq!(es.format(Decimal::new(1_234_550, 2)), "RD$ 12.345,50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    prefix: String,
    locale: NumberLocale,
}

impl PriceFormat {
    /// Currency prefix of the store.
    pub const DEFAULT_PREFIX: &'static str = "RD$";

    /// Create a format with the given currency prefix and locale.
    #[must_use]
    pub fn new(prefix: impl Into<String>, locale: NumberLocale) -> Self {
        Self {
            prefix: prefix.into(),
            locale,
        }
    }

    /// The currency prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The number locale.
    #[must_use]
    pub const fn locale(&self) -> NumberLocale {
        self.locale
    }

    /// Format an amount, rounding half away from zero to two places.
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);

        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = rounded.abs().to_string();
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        // rescale leaves the scale alone when the mantissa has no room left
        let fraction: String = fraction.chars().chain(iter::repeat('0')).take(2).collect();

        let mut out = String::with_capacity(self.prefix.len() + digits.len() + 8);
        out.push_str(&self.prefix);
        out.push(' ');
        if negative {
            out.push('-');
        }
        out.push_str(&group_digits(whole, self.locale));
        out.push(self.locale.decimal_separator());
        out.push_str(&fraction);
        out
    }

    /// Format a unit price.
    #[must_use]
    pub fn format_price(&self, price: Price) -> String {
        self.format(price.amount())
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX, NumberLocale::default())
    }
}

/// Insert the locale's separator between groups of three digits, counting
/// from the right.
fn group_digits(whole: &str, locale: NumberLocale) -> String {
    let len = whole.len();
    if len < 3 + locale.min_grouping_digits() {
        return whole.to_string();
    }
    let separator = locale.grouping_separator();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
