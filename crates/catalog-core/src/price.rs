//! # Price Module
//!
//! Provides the `Price` type for catalog prices.
//!
//! ## Why Fixed-Point?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A price typed as 19.99 and read back from storage must compare        │
//! │  EQUAL to what the caller wrote, whether the caller sent a number      │
//! │  or the string "19.99".                                                │
//! │                                                                         │
//! │  OUR SOLUTION: Decimal with exactly two fractional digits              │
//! │    "19.99"  ─┐                                                          │
//! │    19.99    ─┼──► Price(19.99) ──► stored as 1999 cents               │
//! │    Decimal  ─┘                                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::price::{IntoPrice, Price};
//!
//! let a = Price::parse("12.5").unwrap();
//! let b = 12.50_f64.into_price().unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.cents(), 1250);
//! assert_eq!(a.to_string(), "12.50");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{DataValidationError, ValidationResult};

/// Number of fractional digits kept for every price.
pub const PRICE_SCALE: u32 = 2;

/// Largest accepted price: twelve integer digits, two fractional.
const MAX_PRICE_CENTS: i64 = 99_999_999_999_999;

// =============================================================================
// Price Type
// =============================================================================

/// A non-negative currency amount with exactly two fractional digits.
///
/// ## Design Decisions
/// - **Decimal inside**: exact comparison, no binary float drift
/// - **Normalized on construction**: rounded half away from zero to 2 places
/// - **Stored as cents**: the database column is an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a decimal, rounding to two places.
    ///
    /// ## Errors
    /// Negative values and values above 999,999,999,999.99.
    pub fn new(value: Decimal) -> ValidationResult<Self> {
        let mut rounded =
            value.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(PRICE_SCALE);

        if rounded.is_sign_negative() && !rounded.is_zero() {
            return Err(DataValidationError::invalid_price(
                value.to_string(),
                "must not be negative",
            ));
        }

        if rounded > Decimal::new(MAX_PRICE_CENTS, PRICE_SCALE) {
            return Err(DataValidationError::invalid_price(
                value.to_string(),
                "exceeds 12 integer digits",
            ));
        }

        Ok(Price(rounded.abs()))
    }

    /// Creates a price from cents.
    ///
    /// Performs no range check: use it for values read back from storage,
    /// where the `price_cents >= 0` constraint already holds. Caller input
    /// goes through [`Price::new`] or [`IntoPrice`].
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::Price;
    ///
    /// let price = Price::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Price(Decimal::new(cents, PRICE_SCALE))
    }

    /// Parses a price from text.
    ///
    /// Surrounding whitespace and double quotes are stripped first, so
    /// `" \"19.99\" "` parses the same as `"19.99"`.
    pub fn parse(text: &str) -> ValidationResult<Self> {
        let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '"');

        if trimmed.is_empty() {
            return Err(DataValidationError::invalid_price(text, "empty value"));
        }

        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| DataValidationError::invalid_price(text, e.to_string()))?;

        Price::new(value)
    }

    /// Returns the zero price.
    #[inline]
    pub fn zero() -> Self {
        Price::from_cents(0)
    }

    /// Returns the decimal value.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the value in cents (the storage representation).
    pub fn cents(&self) -> i64 {
        self.0
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.trunc().to_i64())
            .unwrap_or(i64::MAX)
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = DataValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Price::parse(s)
    }
}

impl PartialEq<Decimal> for Price {
    fn eq(&self, other: &Decimal) -> bool {
        self.0 == *other
    }
}

impl PartialEq<f64> for Price {
    fn eq(&self, other: &f64) -> bool {
        Decimal::try_from(*other).map(|d| self.0 == d).unwrap_or(false)
    }
}

// Prices travel as strings ("12.50") in JSON documents.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        value.into_price().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Input Normalization
// =============================================================================

/// Conversion of caller-supplied price inputs into a normalized [`Price`].
///
/// Implemented for the shapes a caller may hand over: a `Price`, a
/// `Decimal`, a float, an integer, a numeric string, or a JSON value.
pub trait IntoPrice {
    /// Normalizes `self` into a price.
    fn into_price(self) -> ValidationResult<Price>;
}

impl IntoPrice for Price {
    fn into_price(self) -> ValidationResult<Price> {
        Ok(self)
    }
}

impl IntoPrice for Decimal {
    fn into_price(self) -> ValidationResult<Price> {
        Price::new(self)
    }
}

impl IntoPrice for f64 {
    fn into_price(self) -> ValidationResult<Price> {
        let value = Decimal::try_from(self)
            .map_err(|e| DataValidationError::invalid_price(self.to_string(), e.to_string()))?;
        Price::new(value)
    }
}

impl IntoPrice for i64 {
    fn into_price(self) -> ValidationResult<Price> {
        Price::new(Decimal::from(self))
    }
}

impl IntoPrice for &str {
    fn into_price(self) -> ValidationResult<Price> {
        Price::parse(self)
    }
}

impl IntoPrice for String {
    fn into_price(self) -> ValidationResult<Price> {
        Price::parse(&self)
    }
}

impl IntoPrice for &String {
    fn into_price(self) -> ValidationResult<Price> {
        Price::parse(self)
    }
}

impl IntoPrice for &serde_json::Value {
    fn into_price(self) -> ValidationResult<Price> {
        match self {
            serde_json::Value::String(s) => Price::parse(s),
            // Going through the textual form keeps 0.1 as 0.1, not 0.1000000000000000055
            serde_json::Value::Number(n) => Price::parse(&n.to_string()),
            _ => Err(DataValidationError::invalid_type("price", "number")),
        }
    }
}

impl IntoPrice for serde_json::Value {
    fn into_price(self) -> ValidationResult<Price> {
        (&self).into_price()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_normalizes_scale() {
        let price = Price::parse("12.5").unwrap();
        assert_eq!(price.to_string(), "12.50");
        assert_eq!(price.cents(), 1250);
        assert_eq!(Price::parse("7").unwrap().to_string(), "7.00");
    }

    #[test]
    fn test_parse_strips_quotes_and_whitespace() {
        assert_eq!(Price::parse(" \"19.99\" ").unwrap(), Price::from_cents(1999));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Price::parse("twelve"),
            Err(DataValidationError::InvalidPrice { .. })
        ));
        assert!(Price::parse("").is_err());
        assert!(Price::parse("\"\"").is_err());
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(Price::parse("0.125").unwrap().cents(), 13);
        assert_eq!(Price::parse("0.124").unwrap().cents(), 12);
    }

    #[test]
    fn test_rejects_negative_and_oversized() {
        assert!(Price::parse("-1.00").is_err());
        assert!(Price::parse("1000000000000.00").is_err());
        assert!(Price::parse("999999999999.99").is_ok());
    }

    #[test]
    fn test_huge_values_are_invalid_not_overflow() {
        for input in ["1e27", "79228162514264337593543950335", "1E+28"] {
            assert!(
                matches!(
                    Price::parse(input),
                    Err(DataValidationError::InvalidPrice { .. })
                ),
                "{input}"
            );
        }
        assert!(matches!(
            1e27_f64.into_price(),
            Err(DataValidationError::InvalidPrice { .. })
        ));
        assert!(matches!(
            1e40_f64.into_price(),
            Err(DataValidationError::InvalidPrice { .. })
        ));
        assert!(matches!(
            (&json!(1e27)).into_price(),
            Err(DataValidationError::InvalidPrice { .. })
        ));
        assert!(matches!(
            Price::new(Decimal::MAX),
            Err(DataValidationError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_native_and_string_inputs_agree() {
        let from_float = 12.50_f64.into_price().unwrap();
        let from_str = "12.50".into_price().unwrap();
        let from_decimal = Decimal::new(1250, 2).into_price().unwrap();
        let from_int = 12_i64.into_price().unwrap();

        assert_eq!(from_float, from_str);
        assert_eq!(from_str, from_decimal);
        assert_eq!(from_int, Price::from_cents(1200));
    }

    #[test]
    fn test_compares_with_native_values() {
        let price = Price::from_cents(1250);
        assert_eq!(price, 12.5_f64);
        assert_eq!(price, Decimal::new(125, 1));
    }

    #[test]
    fn test_json_values() {
        assert_eq!((&json!(3.1)).into_price().unwrap().cents(), 310);
        assert_eq!((&json!("3.10")).into_price().unwrap().cents(), 310);
        assert!(matches!(
            (&json!(true)).into_price(),
            Err(DataValidationError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_serde_uses_string_form() {
        let price = Price::from_cents(1999);
        assert_eq!(serde_json::to_value(price).unwrap(), json!("19.99"));

        let back: Price = serde_json::from_value(json!(19.99)).unwrap();
        assert_eq!(back, price);
    }
}
