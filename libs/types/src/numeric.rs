//! Price and quantity types
//!
//! Prices are fixed-point decimals (rust_decimal) so level keys compare
//! exactly; quantities are whole units. Sums of quantities are carried as a
//! [`Volume`], which is wide enough that no number of resting orders can
//! overflow it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;
use std::str::FromStr;

/// Limit price of an order or price level
///
/// Signed: the book itself places no constraint on the sign of a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Create from a decimal value
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create from a whole unsigned amount
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Create from a whole signed amount
    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// Get the underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// True if the price is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str_exact(s).map(Self)
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unfilled size of a single order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Create from a raw unit count
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Zero quantity
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw unit count
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if quantity is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtract, clamping at zero
    pub const fn saturating_sub(self, rhs: Quantity) -> Quantity {
        Quantity(self.0.saturating_sub(rhs.0))
    }
}

impl From<u64> for Quantity {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregate size of many orders, such as everything resting at one level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volume(u128);

impl Volume {
    /// Create from a raw unit count
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn value(&self) -> u128 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Take a quantity out of the aggregate, clamping at zero
    pub const fn saturating_sub(self, rhs: Quantity) -> Volume {
        Volume(self.0.saturating_sub(rhs.0 as u128))
    }
}

impl AddAssign<Quantity> for Volume {
    fn add_assign(&mut self, rhs: Quantity) {
        // u64::MAX orders of u64::MAX units still fit
        self.0 = self.0.saturating_add(u128::from(rhs.0));
    }
}

impl Sum<Quantity> for Volume {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Volume {
        iter.fold(Volume::zero(), |mut total, qty| {
            total += qty;
            total
        })
    }
}

impl From<Quantity> for Volume {
    fn from(qty: Quantity) -> Self {
        Self(u128::from(qty.0))
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
