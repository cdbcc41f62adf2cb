//! Basis-point representation for percentages.

use core::fmt;

use super::Amount;
use crate::constants::HUNDRED_PCT_BPS;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values are technically valid, but values above 10 000 are
/// nonsensical as percentages. Use [`is_valid_percent`](Self::is_valid_percent)
/// to check; the config and fee-schedule constructors do.
///
/// # Examples
///
/// ```
/// use tidepool_amm::domain::{Amount, BasisPoints};
///
/// let bp = BasisPoints::new(250);
/// assert!(bp.is_valid_percent());
/// assert_eq!(bp.apply(Amount::new(1_900_000_000)), Some(Amount::new(47_500_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(HUNDRED_PCT_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= HUNDRED_PCT_BPS
    }

    /// Computes `floor(amount × self / 10_000)`.
    ///
    /// The multiplication widens to `u128` and the division truncates —
    /// the exact order and width the settlement program uses for fee math,
    /// performed once per fee step. Returns `None` if the result does not
    /// fit back into a lamport amount, which cannot happen for
    /// valid-percent values.
    #[must_use]
    pub const fn apply(&self, amount: Amount) -> Option<Amount> {
        let product = amount.get() as u128 * self.0 as u128;
        let quotient = product / HUNDRED_PCT_BPS as u128;
        if quotient > u64::MAX as u128 {
            return None;
        }
        Some(Amount::new(quotient as u64))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
