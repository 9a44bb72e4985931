//! Type-safe price representation using decimal arithmetic.
//!
//! Prices arrive from the backend as plain JSON numbers. They are kept as
//! [`Decimal`] so cart totals never accumulate float error, and formatted per
//! currency for display (`R$ 1.234,56`, `$1,234.56`).

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing price components.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The currency code is not one the storefront can display.
    #[error("unsupported currency code: {0}")]
    UnknownCurrency(String),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Format for display using the currency's conventions.
    ///
    /// Amounts are rounded half away from zero to two decimal places.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use vitrine_core::{CurrencyCode, Price};
    ///
    /// let price = Price::new(Decimal::new(123_456, 2), CurrencyCode::BRL);
    /// assert_eq!(price.display(), "R$ 1.234,56");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        let conventions = self.currency_code.conventions();
        let rounded = self
            .amount
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let fixed = format!("{rounded:.2}");
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut out = String::with_capacity(fixed.len() + 6);
        if self.amount.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push_str(conventions.symbol);
        if conventions.space_after_symbol {
            out.push(' ');
        }
        out.push_str(&group_thousands(integer, conventions.thousands));
        out.push(conventions.decimal);
        out.push_str(fraction);
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Insert a separator every three digits from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Formatting conventions for a currency.
struct Conventions {
    symbol: &'static str,
    thousands: char,
    decimal: char,
    space_after_symbol: bool,
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Returns the three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }

    const fn conventions(self) -> Conventions {
        match self {
            Self::BRL => Conventions {
                symbol: "R$",
                thousands: '.',
                decimal: ',',
                space_after_symbol: true,
            },
            Self::USD => Conventions {
                symbol: "$",
                thousands: ',',
                decimal: '.',
                space_after_symbol: false,
            },
            Self::EUR => Conventions {
                symbol: "€",
                thousands: '.',
                decimal: ',',
                space_after_symbol: false,
            },
            Self::GBP => Conventions {
                symbol: "£",
                thousands: ',',
                decimal: '.',
                space_after_symbol: false,
            },
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Self::BRL),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(PriceError::UnknownCurrency(s.to_owned())),
        }
    }
}
