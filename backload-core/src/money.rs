//! Whole-peso monetary amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// An amount of Philippine pesos, rounded to the whole peso.
///
/// Listing prices and fuel costs are quoted in whole pesos across the
/// marketplace, so centavos are not tracked.
///
/// # Examples
/// ```
/// use backload_core::Pesos;
///
/// let net = Pesos(5_000) - Pesos(2_167);
/// assert_eq!(net, Pesos(2_833));
/// assert_eq!(net.to_string(), "₱2,833");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pesos(pub i64);

impl Pesos {
    /// Zero pesos.
    pub const ZERO: Self = Self(0);

    /// Return the amount as a floating-point value for ratio computations.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Round a floating-point amount to the nearest peso.
    ///
    /// Non-finite input yields [`Pesos::ZERO`].
    pub fn from_f64_rounded(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::ZERO;
        }
        Self(amount.round() as i64)
    }
}

impl Add for Pesos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Pesos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Pesos {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Pesos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len().div_ceil(3));
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx).is_multiple_of(3) {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}₱{grouped}")
    }
}
