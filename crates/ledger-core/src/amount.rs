//! # Monetary Amounts
//!
//! `Amount` counts minor units (cents) in a `u64`. Floats never represent
//! money anywhere in the workspace: the decimal form exists only at the text
//! boundary (`FromStr`, `Display`, serde).
//!
//! ## Invariants
//!
//! - An `Amount` is never negative. There is no signed constructor.
//! - Arithmetic goes through `checked_add` / `checked_sub`; callers decide
//!   what an overflow or shortfall means.
//! - The text form always has exactly two fractional digits (`"125.00"`).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of minor units in one major unit.
pub const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// A non-negative monetary amount in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(u64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from a count of minor units.
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Create an amount from whole major units.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AmountOverflow`] if the value does not fit
    /// in minor units.
    pub fn from_major(major: u64) -> Result<Self, ValidationError> {
        major
            .checked_mul(MINOR_UNITS_PER_MAJOR)
            .map(Self)
            .ok_or(ValidationError::AmountOverflow { major })
    }

    /// The amount in minor units.
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// `self + rhs`, or `None` on overflow.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// `self - rhs`, or `None` if `rhs` exceeds `self`.
    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Parse a decimal amount such as `"150"`, `"150.5"` or `"150.50"`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAmount`] for empty input, signs,
    /// non-digit characters, more than two fractional digits, or values
    /// that overflow the minor-unit range.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &'static str| ValidationError::InvalidAmount {
            input: input.to_string(),
            reason,
        };

        let s = input.trim();
        if s.is_empty() {
            return Err(invalid("empty"));
        }

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (s, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }
        let whole: u64 = whole.parse().map_err(|_| invalid("out of range"))?;

        let minor = match frac {
            None => 0,
            Some(frac) => {
                if frac.is_empty() || frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid("expected one or two fractional digits"));
                }
                let digits: u64 = frac.parse().map_err(|_| invalid("out of range"))?;
                if frac.len() == 1 {
                    digits * 10
                } else {
                    digits
                }
            }
        };

        whole
            .checked_mul(MINOR_UNITS_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .map(Self)
            .ok_or_else(|| invalid("out of range"))
    }
}

impl std::str::FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Amount {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_UNITS_PER_MAJOR,
            self.0 % MINOR_UNITS_PER_MAJOR
        )
    }
}
