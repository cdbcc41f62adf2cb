//! Taker side of a trade against a pool.

use core::fmt;

/// Which way the taker is trading against the pool.
///
/// The pool is always the counterparty: a taker **buy** pulls an NFT out of
/// the pool's inventory (price walks up the curve), a taker **sell** pushes
/// an NFT into the pool (price walks down).
///
/// # Examples
///
/// ```
/// use tidepool_amm::domain::TakerSide;
///
/// let side = TakerSide::Buy;
/// assert!(side.is_buy());
/// assert!(!side.is_sell());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TakerSide {
    /// The taker buys an NFT from the pool.
    Buy,
    /// The taker sells an NFT into the pool.
    Sell,
}

impl TakerSide {
    /// Returns `true` if this is [`TakerSide::Buy`].
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Returns `true` if this is [`TakerSide::Sell`].
    #[must_use]
    pub const fn is_sell(&self) -> bool {
        matches!(self, Self::Sell)
    }
}

impl fmt::Display for TakerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}
