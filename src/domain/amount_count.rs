//! Outcome of a maker-side amount/count solve.

use super::Amount;
use crate::error::AmmError;

/// The outcome of walking the curve for a maker: how many sequential trades
/// can execute, their total cost, and the price of the first one.
///
/// # Invariants
///
/// - `initial_price` is `None` if and only if `allowed_count == 0`.
/// - `allowed_count == 0` implies `total_amount == 0`.
///
/// Both are enforced at construction.
///
/// # Examples
///
/// ```
/// use tidepool_amm::domain::{Amount, AmountCount};
///
/// let result = AmountCount::new(Amount::new(300), 2, Some(Amount::new(100)));
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmountCount {
    total_amount: Amount,
    allowed_count: u32,
    initial_price: Option<Amount>,
}

impl AmountCount {
    /// The empty solve: no trades possible, nothing spent.
    pub const EMPTY: Self = Self {
        total_amount: Amount::ZERO,
        allowed_count: 0,
        initial_price: None,
    };

    /// Creates a new `AmountCount` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if:
    /// - `allowed_count == 0` but `initial_price` is set or
    ///   `total_amount` is non-zero
    /// - `allowed_count > 0` but `initial_price` is missing
    pub const fn new(
        total_amount: Amount,
        allowed_count: u32,
        initial_price: Option<Amount>,
    ) -> crate::error::Result<Self> {
        if allowed_count == 0 {
            if initial_price.is_some() {
                return Err(AmmError::InvalidQuantity(
                    "initial price without any allowed trade",
                ));
            }
            if !total_amount.is_zero() {
                return Err(AmmError::InvalidQuantity(
                    "non-zero total without any allowed trade",
                ));
            }
        } else if initial_price.is_none() {
            return Err(AmmError::InvalidQuantity(
                "allowed trades without an initial price",
            ));
        }
        Ok(Self {
            total_amount,
            allowed_count,
            initial_price,
        })
    }

    /// Returns the total cost of all allowed trades.
    pub const fn total_amount(&self) -> Amount {
        self.total_amount
    }

    /// Returns the number of trades that can execute.
    #[must_use]
    pub const fn allowed_count(&self) -> u32 {
        self.allowed_count
    }

    /// Returns the price of the first trade, `None` when no trade is
    /// possible.
    #[must_use]
    pub const fn initial_price(&self) -> Option<Amount> {
        self.initial_price
    }

    /// Returns `true` if no trade is possible.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.allowed_count == 0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction -------------------------------------------------------

    #[test]
    fn valid_result() {
        let Ok(r) = AmountCount::new(Amount::new(300), 2, Some(Amount::new(100))) else {
            panic!("expected Ok");
        };
        assert_eq!(r.total_amount(), Amount::new(300));
        assert_eq!(r.allowed_count(), 2);
        assert_eq!(r.initial_price(), Some(Amount::new(100)));
        assert!(!r.is_empty());
    }

    #[test]
    fn empty_constant() {
        assert_eq!(AmountCount::EMPTY.total_amount(), Amount::ZERO);
        assert_eq!(AmountCount::EMPTY.allowed_count(), 0);
        assert_eq!(AmountCount::EMPTY.initial_price(), None);
        assert!(AmountCount::EMPTY.is_empty());
    }

    #[test]
    fn zero_count_zero_total_no_price_is_valid() {
        let result = AmountCount::new(Amount::ZERO, 0, None);
        assert!(result.is_ok());
    }

    #[test]
    fn zero_price_trades_are_valid() {
        // A flat-zero curve sells items for free: count > 0, total = 0,
        // initial price = 0.
        let Ok(r) = AmountCount::new(Amount::ZERO, 5, Some(Amount::ZERO)) else {
            panic!("expected Ok");
        };
        assert_eq!(r.allowed_count(), 5);
        assert_eq!(r.initial_price(), Some(Amount::ZERO));
    }

    // -- Invariant violations -----------------------------------------------

    #[test]
    fn price_without_count_rejected() {
        let result = AmountCount::new(Amount::ZERO, 0, Some(Amount::new(1)));
        assert!(result.is_err());
    }

    #[test]
    fn total_without_count_rejected() {
        let result = AmountCount::new(Amount::new(1), 0, None);
        assert!(result.is_err());
    }

    #[test]
    fn count_without_price_rejected() {
        let result = AmountCount::new(Amount::new(100), 1, None);
        assert!(result.is_err());
    }

    // -- Copy ---------------------------------------------------------------

    #[test]
    fn copy_semantics() {
        let a = AmountCount::EMPTY;
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn debug_format() {
        let dbg = format!("{:?}", AmountCount::EMPTY);
        assert!(dbg.contains("AmountCount"));
    }
}
