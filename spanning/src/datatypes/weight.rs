//! This module defines a wrapper type [Weight] for [f64] that excludes NaN and infinity.

use std::{
    cmp::Ordering,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use num::{CheckedAdd, Zero};

use crate::error::Error;

/// Edge weight backed by a finite [f64]
///
/// Unlike [f64], this type is totally ordered
/// and can therefore be used as a label in [`crate::forest::minimum_spanning_forest`].
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Weight(f64);

impl Weight {
    /// Wraps the given [f64]-`value` as a [Weight].
    ///
    /// # Errors
    /// Returns an error if `value` is [f64::NAN] or infinite.
    pub fn new(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::NonFiniteWeight(value));
        }

        Ok(Self(value))
    }

    /// Return the wrapped value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .partial_cmp(&other.0)
            .expect("Comparison can only fail on NaN values which have been forbidden in this type")
    }
}

/// # Panics
/// Panics if the sum exceeds the range of finite [f64] values.
impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs)
            .expect("sum of weights is not finite; use checked_add to handle overflow")
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl CheckedAdd for Weight {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Weight::new(self.0 + v.0).ok()
    }
}

impl Zero for Weight {
    fn zero() -> Self {
        Weight(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Weight> for Weight {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Weight {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.parse::<f64>()?)
    }
}

impl TryFrom<f64> for Weight {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(value: Weight) -> Self {
        value.0
    }
}
