//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On the wire an amount is a plain decimal number (`50.0`) so that
//! exported files stay readable by other tools.
//!
//! Parsed and decoded amounts are capped at [`MAX_CENTS`], the largest cent
//! count an `f64` holds exactly. Arithmetic saturates instead of wrapping.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest accepted magnitude, in cents (2^53)
pub const MAX_CENTS: i64 = 1 << 53;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use pocket_money::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_f64(), 10.5);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a Money amount from a decimal, rounding to the nearest cent
    ///
    /// Out-of-range values saturate; use [`Money::try_from_f64`] to reject them.
    pub fn from_f64(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    /// Like [`Money::from_f64`], but `None` for non-finite values or
    /// magnitudes above [`MAX_CENTS`]
    pub fn try_from_f64(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if cents.is_finite() && cents.abs() <= MAX_CENTS as f64 {
            Some(Self(cents as i64))
        } else {
            None
        }
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The amount as a decimal
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whole units (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());
        let too_large = || MoneyParseError::TooLarge(trimmed.to_string());

        let cents = match rest.split_once('.') {
            Some((units_str, cents_str)) => {
                if cents_str.contains('.') || (units_str.is_empty() && cents_str.is_empty()) {
                    return Err(invalid());
                }
                let units: i64 = if units_str.is_empty() {
                    0
                } else {
                    parse_digits(units_str).ok_or_else(invalid)?
                };

                // Pad or truncate to 2 digits
                let cents: i64 = match cents_str.len() {
                    0 => 0,
                    1 => parse_digits(cents_str).ok_or_else(invalid)? * 10,
                    _ => {
                        if !cents_str.chars().all(|c| c.is_ascii_digit()) {
                            return Err(invalid());
                        }
                        parse_digits(&cents_str[..2]).ok_or_else(invalid)?
                    }
                };

                units
                    .checked_mul(100)
                    .and_then(|v| v.checked_add(cents))
                    .ok_or_else(too_large)?
            }
            None => parse_digits(rest)
                .ok_or_else(invalid)?
                .checked_mul(100)
                .ok_or_else(too_large)?,
        };

        if cents > MAX_CENTS {
            return Err(too_large());
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::try_from_f64(value).ok_or_else(|| {
            serde::de::Error::custom(format!("amount {} is not a finite number within range", value))
        })
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Amount is required"),
            Self::InvalidFormat(s) => write!(f, "Please enter a valid amount: '{}'", s),
            Self::TooLarge(s) => write!(f, "Amount '{}' is too large", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
