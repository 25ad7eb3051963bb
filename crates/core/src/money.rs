//! Monetary amounts.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Minor units per major unit (paise per rupee).
const MINOR_PER_MAJOR: u64 = 100;

/// Non-negative amount in the smallest currency unit (paise).
///
/// Arithmetic saturates at `u64::MAX` instead of wrapping.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(MINOR_PER_MAJOR))
    }

    pub fn minor(&self) -> u64 {
        self.0
    }

    /// Value of `quantity` units priced at `self`.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Rs.{}.{:02}",
            self.0 / MINOR_PER_MAJOR,
            self.0 % MINOR_PER_MAJOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Money::from_major(34000).to_string(), "Rs.34000.00");
        assert_eq!(Money::from_minor(1999).to_string(), "Rs.19.99");
        assert_eq!(Money::from_minor(5).to_string(), "Rs.0.05");
    }

    #[test]
    fn multiplication_saturates() {
        assert_eq!(Money::from_minor(u64::MAX).times(2), Money::from_minor(u64::MAX));
        assert_eq!(Money::from_major(100).times(0), Money::ZERO);
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert_eq!(total, Money::ZERO);
    }

    proptest! {
        #[test]
        fn times_matches_integer_product(price in 0u64..10_000_000, qty in 0u32..100_000) {
            prop_assert_eq!(Money::from_minor(price).times(qty).minor(), price * u64::from(qty));
        }
    }
}
