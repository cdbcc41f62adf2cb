//! Pool blueprint: type, curve, and starting price.

use core::fmt;

use crate::constants::{MAX_DELTA_BPS, MAX_MM_FEE_BPS};
use crate::curve::Curve;
use crate::domain::{Amount, BasisPoints, TakerSide};
use crate::error::AmmError;

/// The three pool types and the sides they trade.
///
/// | Kind | Taker buys | Taker sells | Holds |
/// |------|------------|-------------|-------|
/// | [`Nft`](Self::Nft) | yes | no | NFTs only |
/// | [`Token`](Self::Token) | no | yes | currency only |
/// | [`Trade`](Self::Trade) | yes | yes | both, earning a spread |
///
/// A market-maker fee exists only on trade pools, so it lives in the
/// `Trade` variant's payload — there is no "mm fee on an NFT pool" state
/// to validate away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolKind {
    /// Maker deposits NFTs; takers buy them out.
    Nft,
    /// Maker deposits currency; takers sell NFTs into it.
    Token,
    /// Maker provides both sides and earns the bid/ask spread.
    Trade {
        /// Market-maker fee charged on taker sells, in basis points.
        mm_fee: BasisPoints,
        /// Whether collected mm fees fold back into the pool's quoted
        /// balance. When `false`, fees route to a side-channel balance
        /// and this core only reports the amount.
        compound_fees: bool,
    },
}

impl PoolKind {
    /// Returns `true` for [`PoolKind::Nft`].
    #[must_use]
    pub const fn is_nft(&self) -> bool {
        matches!(self, Self::Nft)
    }

    /// Returns `true` for [`PoolKind::Token`].
    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self, Self::Token)
    }

    /// Returns `true` for [`PoolKind::Trade`].
    #[must_use]
    pub const fn is_trade(&self) -> bool {
        matches!(self, Self::Trade { .. })
    }

    /// Whether this pool type trades the given taker side at all.
    ///
    /// NFT pools only sell to takers (taker buys); token pools only buy
    /// from takers (taker sells); trade pools do both.
    #[must_use]
    pub const fn supports(&self, side: TakerSide) -> bool {
        match (self, side) {
            (Self::Nft, TakerSide::Sell) | (Self::Token, TakerSide::Buy) => false,
            _ => true,
        }
    }

    /// The market-maker fee rate, present only on trade pools.
    #[must_use]
    pub const fn mm_fee_bps(&self) -> Option<BasisPoints> {
        match self {
            Self::Trade { mm_fee, .. } => Some(*mm_fee),
            _ => None,
        }
    }

    /// Whether mm fees fold back into the pool balance.
    ///
    /// Always `false` for non-trade pools, which charge no mm fee.
    #[must_use]
    pub const fn compounds_fees(&self) -> bool {
        match self {
            Self::Trade { compound_fees, .. } => *compound_fees,
            _ => false,
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nft => write!(f, "Nft"),
            Self::Token => write!(f, "Token"),
            Self::Trade { mm_fee, .. } => write!(f, "Trade(mm_fee={mm_fee})"),
        }
    }
}

/// Immutable pool parameters backing a quote.
///
/// A `PoolConfig` is the pricing-relevant slice of an on-ledger pool
/// account, read by the transaction-assembly layer and handed in per call.
/// Construction validates every structural invariant once, so the quote
/// paths never re-check and never fail on configuration.
///
/// # Validation
///
/// - Exponential rate at most [`MAX_DELTA_BPS`].
/// - Trade-pool mm fee at most [`MAX_MM_FEE_BPS`].
///
/// Enum payloads can be written directly, bypassing the curve and kind
/// convenience constructors, so `new` re-validates the complete value —
/// the same belt-and-braces the settlement program applies to accounts it
/// deserializes.
///
/// # Examples
///
/// ```
/// use tidepool_amm::config::{PoolConfig, PoolKind};
/// use tidepool_amm::curve::Curve;
/// use tidepool_amm::domain::Amount;
///
/// let config = PoolConfig::new(
///     PoolKind::Nft,
///     Curve::linear(Amount::new(100_000_000)),
///     Amount::new(2_000_000_000),
/// );
/// assert!(config.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    kind: PoolKind,
    curve: Curve,
    starting_price: Amount,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] or
    /// [`AmmError::InvalidFee`] if any invariant fails; see
    /// [`validate`](Self::validate).
    pub const fn new(
        kind: PoolKind,
        curve: Curve,
        starting_price: Amount,
    ) -> crate::error::Result<Self> {
        let config = Self {
            kind,
            curve,
            starting_price,
        };
        if let Err(e) = config.validate() {
            return Err(e);
        }
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if an exponential rate is at
    ///   or above 100%.
    /// - [`AmmError::InvalidFee`] if a trade pool's mm fee exceeds
    ///   [`MAX_MM_FEE_BPS`].
    pub const fn validate(&self) -> crate::error::Result<()> {
        if let Curve::Exponential { rate } = self.curve {
            if rate.get() > MAX_DELTA_BPS {
                return Err(AmmError::InvalidConfiguration(
                    "exponential rate at or above 100%",
                ));
            }
        }
        if let PoolKind::Trade { mm_fee, .. } = self.kind {
            if mm_fee.get() > MAX_MM_FEE_BPS {
                return Err(AmmError::InvalidFee("mm fee at or above 100%"));
            }
        }
        Ok(())
    }

    /// Returns the pool type.
    #[must_use]
    pub const fn kind(&self) -> PoolKind {
        self.kind
    }

    /// Returns the bonding curve.
    #[must_use]
    pub const fn curve(&self) -> Curve {
        self.curve
    }

    /// Returns the starting price, in lamports.
    pub const fn starting_price(&self) -> Amount {
        self.starting_price
    }
}
