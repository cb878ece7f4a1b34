//! Messaging destination address.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Destination`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DestinationError {
    /// The input string is empty.
    #[error("destination cannot be empty")]
    Empty,
    /// The input contains something other than digits.
    #[error("destination may only contain digits (found {0:?})")]
    InvalidCharacter(char),
    /// The input is longer than an international phone number can be.
    #[error("destination must be at most {max} digits")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// The messaging account that receives orders.
///
/// This is a phone number in international format without the leading `+`,
/// which is the form the click-to-chat endpoint expects in its path.
///
/// ## Constraints
///
/// - 1-15 digits (E.164 limit)
/// - A single leading `+` is accepted and dropped
///
/// ## Examples
///
/// ```
/// use ventas_core::Destination;
///
/// assert_eq!(Destination::parse("+18492143712").unwrap().as_str(), "18492143712");
/// assert!(Destination::parse("").is_err());
/// assert!(Destination::parse("849-214").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Destination(String);

impl Destination {
    /// Maximum number of digits (E.164).
    pub const MAX_LENGTH: usize = 15;

    /// Parse a `Destination` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 15 digits, or
    /// contains anything but digits after the optional leading `+`.
    pub fn parse(s: &str) -> Result<Self, DestinationError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(DestinationError::Empty);
        }

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(DestinationError::InvalidCharacter(bad));
        }

        if digits.len() > Self::MAX_LENGTH {
            return Err(DestinationError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(digits.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Destination {
    type Err = DestinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Destination {
    type Error = DestinationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Destination> for String {
    fn from(destination: Destination) -> Self {
        destination.0
    }
}

impl AsRef<str> for Destination {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
