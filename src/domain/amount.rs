//! Raw lamport amount with checked arithmetic.

use core::fmt;

/// A currency amount in lamports, the chain's smallest unit.
///
/// `Amount` is a thin wrapper over `u64` — the width the settlement program
/// computes in. Settlement aborts the transaction when a price computation
/// overflows `u64`, so a quote produced at a wider width would happily
/// price a trade the chain rejects.
///
/// Arithmetic methods are checked: they return `None` on overflow or
/// underflow instead of panicking. Quote paths treat a checked failure as
/// "settlement would abort here" and surface it as a no-quote.
///
/// # Examples
///
/// ```
/// use tidepool_amm::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(a.checked_sub(&b), None); // would be negative
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u64);

impl Amount {
    /// Zero lamports.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u64::MAX);

    /// One SOL, in lamports.
    pub const ONE_SOL: Self = Self(1_000_000_000);

    /// Creates a new `Amount` from a raw lamport value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying lamport value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication by an item count.
    ///
    /// Used by the linear curve for `delta × ticks`. Returns `None` on
    /// overflow.
    #[must_use]
    pub const fn checked_mul_count(&self, count: u32) -> Option<Self> {
        match self.0.checked_mul(count as u64) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
