//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finance_dashboard::models::Money;
    /// let amount = Money::from_cents(25050); // 250.50
    /// assert_eq!(amount.to_string(), "250.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Amount as a float, for chart geometry only
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "R$ 10.50", "10", "10.5".
    /// Amounts with more than two decimal places are rounded to the nearest
    /// cent, halves away from zero: "12.345" is 12.35, "-12.345" is -12.35.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped.trim_start())
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s
            .strip_prefix("R$")
            .or_else(|| s.strip_prefix('$'))
            .unwrap_or(s)
            .trim_start();

        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        if s.is_empty() || s.starts_with('-') || s.starts_with('+') {
            return Err(invalid());
        }

        let cents = if let Some((whole, frac)) = s.split_once('.') {
            if whole.is_empty() || frac.contains('.') {
                return Err(invalid());
            }
            if !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }

            let whole: i64 = whole.parse().map_err(|_| invalid())?;

            // Pad to 2 digits, or round on the third
            let cents: i64 = match frac.len() {
                0 => 0,
                1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                _ => {
                    let cents: i64 = frac[..2].parse().map_err(|_| invalid())?;
                    if frac.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
                        cents + 1
                    } else {
                        cents
                    }
                }
            };

            whole
                .checked_mul(100)
                .and_then(|c| c.checked_add(cents))
                .ok_or_else(invalid)?
        } else {
            s.parse::<i64>()
                .ok()
                .and_then(|whole| whole.checked_mul(100))
                .ok_or_else(invalid)?
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format as currency with a symbol and thousands separators
    ///
    /// The sign follows the symbol: `R$ 3,000.00`, `R$ -250.50`.
    pub fn format_currency(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{} {}{}.{:02}",
            symbol,
            sign,
            group_thousands(self.units().unsigned_abs()),
            self.cents_part()
        )
    }
}

/// Insert a comma between every group of three digits
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Plain signed decimal with two places, e.g. `-250.50`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
