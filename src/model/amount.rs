//! Amount type for whole-unit kas values.
//!
//! Command text may carry `.` or `,` thousands separators ("50.000",
//! "1,234,567"); both are separators only, never decimal points, so
//! "50.000" is fifty thousand. Formatting always groups digits with `.` and
//! appends the `$` marker used throughout the reports.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// A kas amount in the smallest currency unit. There are no fractional
/// amounts and no negative amounts; the direction of a movement is carried
/// by the command, not by the sign.
///
/// # Examples
///
/// Parsing with separators:
/// ```
/// # use kasbot::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("50.000").unwrap();
/// assert_eq!(amount.value(), 50000);
/// assert_eq!(amount.to_string(), "50.000$");
/// ```
///
/// Separator style is not preserved; output always groups with `.`:
/// ```
/// # use kasbot::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("1,234,567").unwrap();
/// assert_eq!(amount.to_string(), "1.234.567$");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    /// Creates a new Amount from a whole number of currency units.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

/// An error that can occur when parsing a string into an `Amount`.
pub struct AmountError {
    input: String,
}

impl AmountError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "AmountError({:?})", self.input)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "not a valid whole amount: '{}'", self.input)
    }
}

impl std::error::Error for AmountError {}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Separators carry no value, so the amount is the run of digits.
        // Input that leaves no digits at all is not an amount.
        let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(AmountError::new(s));
        }
        digits.parse::<u64>().map(Amount).map_err(|_| AmountError::new(s))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "{grouped}$")
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The store document holds a plain integer.
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Amount(u64::deserialize(deserializer)?))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}
