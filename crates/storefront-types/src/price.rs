//! Prices in whole currency units.
//!
//! Menu prices arrive as display text (`₦3,500`). Parsing strips the
//! currency glyph and every thousands separator and reads the remainder
//! as an integer. Formatting goes the other way with `en` grouping.

use std::fmt;

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

use crate::error::PriceError;

/// The Naira sign, the storefront's default currency glyph.
pub const NAIRA: &str = "₦";

/// An amount in whole currency units. There is no minor unit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn new(units: u64) -> Self {
        Self(units)
    }

    pub fn units(&self) -> u64 {
        self.0
    }

    /// Parse display text such as `₦3,500` or `₦12,000,000`.
    pub fn parse_display(text: &str, glyph: &str) -> Result<Self, PriceError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let digits: String = trimmed
            .strip_prefix(glyph)
            .unwrap_or(trimmed)
            .chars()
            .filter(|c| *c != ',')
            .collect();
        let digits = digits.trim();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PriceError::Malformed {
                text: text.to_string(),
            });
        }

        digits.parse::<u64>().map(Price).map_err(|_| PriceError::Malformed {
            text: text.to_string(),
        })
    }

    /// Price of `quantity` units of this item.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }

    /// Format with `en` thousands separators and the given glyph prefix.
    pub fn format(&self, glyph: &str) -> String {
        format!("{}{}", glyph, self.0.to_formatted_string(&Locale::en))
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(NAIRA))
    }
}
