//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    6.50 + 9.10 + 11.20 = 26.799999999999997  ❌ WRONG!                  │
//! │                                                                         │
//! │  Totals are printed on a receipt the customer pays from, so drift      │
//! │  across repeated additions is a visible defect.                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    650 + 910 + 1120 = 2680 pence = £26.80 exactly                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pressline_core::money::Money;
//!
//! let shirt = Money::from_pence(650); // £6.50
//! let total = shirt + Money::from_pence(910);
//! assert_eq!(total.amount_string(), "15.60");
//!
//! let parsed: Money = "11.20".parse().unwrap();
//! assert_eq!(parsed.pence(), 1120);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::TaxRate;

/// Currency glyph printed in front of every money field.
pub const CURRENCY_SYMBOL: char = '£';

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in pence.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction (savings) can never wrap
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: serde support serializes the raw pence count
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Catalog price ──► OrderItem.price ──► Σ subtotal ──► tier savings     │
/// │                                                                         │
/// │  total (after savings) ──► VAT ──► total inc. VAT                      │
/// │                                                                         │
/// │  Every value ends up right-aligned in a "£ 6.50" receipt column        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pressline_core::money::Money;
    ///
    /// let price = Money::from_pence(1099); // Represents £10.99
    /// assert_eq!(price.pence(), 1099);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole pounds portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns `bps` basis points of this amount, rounded half-up to the penny.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use pressline_core::money::Money;
    ///
    /// // 15% of £40.00
    /// assert_eq!(Money::from_pence(4000).percentage(1500).pence(), 600);
    /// // 10% of £15.05 = 150.5p → 151p
    /// assert_eq!(Money::from_pence(1505).percentage(1000).pence(), 151);
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        // i128 keeps large receipts from overflowing mid-calculation
        let part = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_pence(part as i64)
    }

    /// Calculates the tax due on this amount.
    ///
    /// ## Example
    /// ```rust
    /// use pressline_core::money::Money;
    /// use pressline_core::types::TaxRate;
    ///
    /// let total = Money::from_pence(650);  // £6.50
    /// let vat = total.calculate_tax(TaxRate::from_bps(2000)); // 20%
    /// assert_eq!(vat.pence(), 130);
    /// ```
    ///
    /// ## Workflow
    /// ```text
    /// Total after savings: £6.50
    ///      │
    ///      ▼
    /// calculate_tax(20%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// VAT: £1.30  ──►  Total inc. VAT: £7.80
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        self.percentage(rate.bps())
    }

    /// Formats the amount without the currency glyph: `"6.50"`, `"-5.50"`.
    ///
    /// Receipt columns right-align this string inside a fixed width, so the
    /// glyph is printed separately by the layout code.
    pub fn amount_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with the currency glyph: `£6.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.pounds().abs(),
            self.pence_part()
        )
    }
}

/// Parses decimal amounts such as `"8"`, `"8.5"`, `"£11.20"`.
///
/// Floats are never involved: the whole and fractional parts are parsed as
/// integers. More than two decimal places is rejected.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("'{}' {}", s, reason),
        };

        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("is not a decimal amount"));
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must have at most two decimal places"));
        }

        let pounds: i64 = whole.parse().map_err(|_| invalid("is too large"))?;
        let pence: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("is not a decimal amount"))? * 10,
            _ => frac.parse().map_err(|_| invalid("is not a decimal amount"))?,
        };

        let total = pounds
            .checked_mul(100)
            .and_then(|p| p.checked_add(pence))
            .ok_or_else(|| invalid("is too large"))?;

        Ok(Money(if negative { -total } else { total }))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Serde Helpers
// =============================================================================

/// Serializes `Option<Money>` as a decimal string (`"8.00"`) and reads it back.
///
/// Catalog files are edited by hand, so prices are written the way they
/// appear on the shop's price list rather than as raw pence. Reading accepts
/// a string (`"8.00"`), a whole number (`8`) or a decimal number (`8.5`);
/// every form goes through [`Money::from_str`](std::str::FromStr), so no
/// more than two decimal places are allowed.
///
/// ```rust,ignore
/// #[serde(default, with = "crate::money::optional_amount")]
/// pub standard: Option<Money>,
/// ```
pub mod optional_amount {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Money;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Text(String),
        Whole(i64),
        Decimal(f64),
    }

    impl RawAmount {
        fn into_text(self) -> String {
            match self {
                RawAmount::Text(text) => text,
                RawAmount::Whole(n) => n.to_string(),
                RawAmount::Decimal(f) => f.to_string(),
            }
        }
    }

    pub fn serialize<S>(value: &Option<Money>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(money) => serializer.serialize_some(&money.amount_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<RawAmount> = Option::deserialize(deserializer).map_err(|_| {
            <D::Error as serde::de::Error>::custom(
                "price must be an amount such as \"8.00\" or 8.00",
            )
        })?;
        raw.map(|amount| {
            amount
                .into_text()
                .parse::<Money>()
                .map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(1099);
        assert_eq!(money.pence(), 1099);
        assert_eq!(money.pounds(), 10);
        assert_eq!(money.pence_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_pence(1099)), "£10.99");
        assert_eq!(format!("{}", Money::from_pence(500)), "£5.00");
        assert_eq!(format!("{}", Money::from_pence(-550)), "-£5.50");
        assert_eq!(format!("{}", Money::from_pence(0)), "£0.00");
    }

    #[test]
    fn test_amount_string() {
        assert_eq!(Money::from_pence(650).amount_string(), "6.50");
        assert_eq!(Money::from_pence(5).amount_string(), "0.05");
        assert_eq!(Money::from_pence(12345).amount_string(), "123.45");
        assert_eq!(Money::from_pence(-550).amount_string(), "-5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pence(1000);
        let b = Money::from_pence(500);

        assert_eq!((a + b).pence(), 1500);
        assert_eq!((a - b).pence(), 500);

        let mut c = a;
        c += b;
        c -= Money::from_pence(200);
        assert_eq!(c.pence(), 1300);
    }

    #[test]
    fn test_sum_has_no_drift() {
        // 0.10 added ten times is exactly 1.00
        let total: Money = std::iter::repeat(Money::from_pence(10)).take(10).sum();
        assert_eq!(total, Money::from_pence(100));

        let prices = [Money::from_pence(650), Money::from_pence(910), Money::from_pence(1120)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.amount_string(), "26.80");
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(Money::from_pence(4000).percentage(1500).pence(), 600);
        assert_eq!(Money::from_pence(1505).percentage(1000).pence(), 151);
        assert_eq!(Money::from_pence(1504).percentage(1000).pence(), 150);
    }

    #[test]
    fn test_tax_calculation() {
        let rate = TaxRate::from_bps(2000);
        assert_eq!(Money::from_pence(650).calculate_tax(rate).pence(), 130);
        assert_eq!(Money::from_pence(3400).calculate_tax(rate).pence(), 680);
    }

    #[test]
    fn test_parse() {
        assert_eq!("8".parse::<Money>().unwrap().pence(), 800);
        assert_eq!("8.5".parse::<Money>().unwrap().pence(), 850);
        assert_eq!("11.20".parse::<Money>().unwrap().pence(), 1120);
        assert_eq!("£9.95".parse::<Money>().unwrap().pence(), 995);
        assert_eq!(" 0.00 ".parse::<Money>().unwrap().pence(), 0);
        assert_eq!("-5.50".parse::<Money>().unwrap().pence(), -550);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("1.234".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("1.5x".parse::<Money>().is_err());
    }

    #[test]
    fn test_optional_amount_round_trip_through_json() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Row {
            #[serde(default, with = "optional_amount")]
            price: Option<Money>,
        }

        let row: Row = serde_json::from_str(r#"{"price":"16.80"}"#).unwrap();
        assert_eq!(row.price, Some(Money::from_pence(1680)));

        let missing: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.price, None);

        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"price":"16.80"}"#);
    }

    #[test]
    fn test_optional_amount_accepts_bare_numbers() {
        #[derive(Deserialize, Debug)]
        struct Row {
            #[serde(default, with = "optional_amount")]
            price: Option<Money>,
        }

        let row: Row = serde_json::from_str(r#"{"price":16.8}"#).unwrap();
        assert_eq!(row.price, Some(Money::from_pence(1680)));

        let row: Row = serde_json::from_str(r#"{"price":8}"#).unwrap();
        assert_eq!(row.price, Some(Money::from_pence(800)));

        let row: Row = toml::from_str("price = 9.95").unwrap();
        assert_eq!(row.price, Some(Money::from_pence(995)));

        // Three decimal places are rejected whatever the form
        assert!(serde_json::from_str::<Row>(r#"{"price":9.999}"#).is_err());

        let err = serde_json::from_str::<Row>(r#"{"price":true}"#).unwrap_err();
        assert!(err.to_string().contains("price must be an amount"));
    }
}
