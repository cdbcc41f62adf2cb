//! Splitting a gross trade price into protocol, maker, and broker cuts.

use crate::constants::{
    MAKER_REBATE_BPS, SNIPE_FEE_BPS, SNIPE_MIN_FEE, TAKER_FEE_BPS,
};
use crate::domain::{Amount, BasisPoints};
use crate::error::AmmError;

/// The fee parameters applied to a taker trade.
///
/// A schedule is validated once at construction and then splits any number
/// of gross prices. The protocol's live schedule is
/// [`FeeSchedule::protocol()`]; custom schedules exist for simulation and
/// for fee experiments on devnet deployments.
///
/// # Examples
///
/// ```
/// use tidepool_amm::domain::Amount;
/// use tidepool_amm::pricing::FeeSchedule;
///
/// let schedule = FeeSchedule::protocol();
/// let split = schedule.split(Amount::new(1_000_000_000)).expect("fits");
/// assert_eq!(split.taker_fee(), Amount::new(14_000_000)); // 140 bp
/// assert_eq!(split.maker_rebate(), Amount::new(2_500_000)); // 25 bp
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeSchedule {
    taker_fee: BasisPoints,
    maker_rebate: BasisPoints,
    broker_pct: u8,
    sniping: bool,
}

impl FeeSchedule {
    /// Creates a schedule from taker-fee and maker-rebate rates.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if either rate exceeds 100% or the
    /// rebate exceeds the taker fee.
    pub const fn new(
        taker_fee: BasisPoints,
        maker_rebate: BasisPoints,
    ) -> crate::error::Result<Self> {
        if !taker_fee.is_valid_percent() {
            return Err(AmmError::InvalidFee("taker fee above 100%"));
        }
        if !maker_rebate.is_valid_percent() {
            return Err(AmmError::InvalidFee("maker rebate above 100%"));
        }
        if maker_rebate.get() > taker_fee.get() {
            return Err(AmmError::InvalidFee("maker rebate above taker fee"));
        }
        Ok(Self {
            taker_fee,
            maker_rebate,
            broker_pct: 0,
            sniping: false,
        })
    }

    /// The protocol's live schedule, from the mirrored settlement
    /// constants.
    #[must_use]
    pub const fn protocol() -> Self {
        Self {
            taker_fee: BasisPoints::new(TAKER_FEE_BPS),
            maker_rebate: BasisPoints::new(MAKER_REBATE_BPS),
            broker_pct: 0,
            sniping: false,
        }
    }

    /// Routes a percentage of the post-rebate fee to an order-flow broker.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `pct` exceeds 100.
    pub const fn with_broker_pct(mut self, pct: u8) -> crate::error::Result<Self> {
        if pct > 100 {
            return Err(AmmError::InvalidFee("broker share above 100%"));
        }
        self.broker_pct = pct;
        Ok(self)
    }

    /// Marks the trade as a listing snipe, switching the taker fee to the
    /// snipe rate with its absolute floor.
    pub const fn with_sniping(mut self, sniping: bool) -> Self {
        self.sniping = sniping;
        self
    }

    /// Returns the taker-fee rate.
    #[must_use]
    pub const fn taker_fee_bps(&self) -> BasisPoints {
        self.taker_fee
    }

    /// Returns the maker-rebate rate.
    #[must_use]
    pub const fn maker_rebate_bps(&self) -> BasisPoints {
        self.maker_rebate
    }

    /// Returns the broker's percentage of the post-rebate fee.
    #[must_use]
    pub const fn broker_pct(&self) -> u8 {
        self.broker_pct
    }

    /// Returns `true` if this schedule prices a listing snipe.
    #[must_use]
    pub const fn is_sniping(&self) -> bool {
        self.sniping
    }

    /// Splits a gross trade price into its fee components.
    ///
    /// Every division truncates, in the same order settlement performs it:
    /// taker fee off the gross, rebate off the gross (clamped to the taker
    /// fee), broker share off the remainder, protocol keeps the rest.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if a component does not fit a
    /// lamport amount — unreachable for valid-percent schedules, which
    /// construction guarantees.
    pub fn split(&self, gross: Amount) -> crate::error::Result<FeeSplit> {
        let taker_fee = if self.sniping {
            snipe_fee(gross)
        } else {
            self.taker_fee.apply(gross)
        }
        .ok_or(AmmError::Overflow("taker fee overflow"))?;

        let rebate_raw = self
            .maker_rebate
            .apply(gross)
            .ok_or(AmmError::Overflow("maker rebate overflow"))?;
        // The snipe rate is independent of the rebate rate, so clamp to
        // keep the rebate inside the fee it is carved from.
        let maker_rebate = if rebate_raw > taker_fee {
            taker_fee
        } else {
            rebate_raw
        };

        let remainder = taker_fee
            .checked_sub(&maker_rebate)
            .ok_or(AmmError::Overflow("fee remainder underflow"))?;

        let broker_fee = if self.broker_pct > 0 {
            let share = u128::from(remainder.get()) * u128::from(self.broker_pct) / 100;
            // share ≤ remainder, so the narrowing cannot lose bits.
            Amount::new(share as u64)
        } else {
            Amount::ZERO
        };

        let protocol_fee = remainder
            .checked_sub(&broker_fee)
            .ok_or(AmmError::Overflow("protocol fee underflow"))?;

        FeeSplit::new(taker_fee, maker_rebate, broker_fee, protocol_fee)
    }
}

/// The snipe taker fee: the snipe rate with an absolute lamport floor.
fn snipe_fee(gross: Amount) -> Option<Amount> {
    let by_rate = BasisPoints::new(SNIPE_FEE_BPS).apply(gross)?;
    let floor = Amount::new(SNIPE_MIN_FEE);
    Some(if by_rate > floor { by_rate } else { floor })
}

/// A gross price split into its fee components.
///
/// # Invariant
///
/// `taker_fee = maker_rebate + broker_fee + protocol_fee`, enforced at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeSplit {
    taker_fee: Amount,
    maker_rebate: Amount,
    broker_fee: Amount,
    protocol_fee: Amount,
}

impl FeeSplit {
    /// Creates a split with the components invariant validated.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if the components do not sum
    /// to the taker fee.
    pub const fn new(
        taker_fee: Amount,
        maker_rebate: Amount,
        broker_fee: Amount,
        protocol_fee: Amount,
    ) -> crate::error::Result<Self> {
        let sum = maker_rebate.get() as u128
            + broker_fee.get() as u128
            + protocol_fee.get() as u128;
        if sum != taker_fee.get() as u128 {
            return Err(AmmError::InvalidQuantity(
                "fee components do not sum to taker fee",
            ));
        }
        Ok(Self {
            taker_fee,
            maker_rebate,
            broker_fee,
            protocol_fee,
        })
    }

    /// Total fee charged to the taker.
    pub const fn taker_fee(&self) -> Amount {
        self.taker_fee
    }

    /// Portion rebated to the pool owner.
    pub const fn maker_rebate(&self) -> Amount {
        self.maker_rebate
    }

    /// Portion routed to the order-flow broker.
    pub const fn broker_fee(&self) -> Amount {
        self.broker_fee
    }

    /// Portion kept by the protocol.
    pub const fn protocol_fee(&self) -> Amount {
        self.protocol_fee
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const SOL: u64 = 1_000_000_000;

    // -- Schedule construction ----------------------------------------------

    #[test]
    fn protocol_schedule() {
        let s = FeeSchedule::protocol();
        assert_eq!(s.taker_fee_bps(), BasisPoints::new(TAKER_FEE_BPS));
        assert_eq!(s.maker_rebate_bps(), BasisPoints::new(MAKER_REBATE_BPS));
        assert_eq!(s.broker_pct(), 0);
        assert!(!s.is_sniping());
    }

    #[test]
    fn rebate_above_taker_fee_rejected() {
        let result = FeeSchedule::new(BasisPoints::new(100), BasisPoints::new(101));
        assert_eq!(result, Err(AmmError::InvalidFee("maker rebate above taker fee")));
    }

    #[test]
    fn taker_fee_above_hundred_percent_rejected() {
        let result = FeeSchedule::new(BasisPoints::new(10_001), BasisPoints::ZERO);
        assert!(result.is_err());
    }

    #[test]
    fn broker_share_above_hundred_rejected() {
        let result = FeeSchedule::protocol().with_broker_pct(101);
        assert!(result.is_err());
    }

    // -- split: standard path -----------------------------------------------

    #[test]
    fn split_protocol_schedule_one_sol() {
        let Ok(split) = FeeSchedule::protocol().split(Amount::new(SOL)) else {
            panic!("expected Ok");
        };
        // 140 bp → 14_000_000; 25 bp → 2_500_000; no broker.
        assert_eq!(split.taker_fee(), Amount::new(14_000_000));
        assert_eq!(split.maker_rebate(), Amount::new(2_500_000));
        assert_eq!(split.broker_fee(), Amount::ZERO);
        assert_eq!(split.protocol_fee(), Amount::new(11_500_000));
    }

    #[test]
    fn split_components_sum_to_taker_fee() {
        let Ok(schedule) = FeeSchedule::protocol().with_broker_pct(40) else {
            panic!("expected Ok");
        };
        let Ok(split) = schedule.split(Amount::new(999_999_999)) else {
            panic!("expected Ok");
        };
        let sum = split.maker_rebate().get() + split.broker_fee().get()
            + split.protocol_fee().get();
        assert_eq!(sum, split.taker_fee().get());
    }

    #[test]
    fn split_broker_takes_floor_of_remainder_share() {
        let Ok(schedule) = FeeSchedule::protocol().with_broker_pct(40) else {
            panic!("expected Ok");
        };
        let Ok(split) = schedule.split(Amount::new(SOL)) else {
            panic!("expected Ok");
        };
        // remainder = 14_000_000 − 2_500_000 = 11_500_000; 40% = 4_600_000
        assert_eq!(split.broker_fee(), Amount::new(4_600_000));
        assert_eq!(split.protocol_fee(), Amount::new(6_900_000));
    }

    #[test]
    fn split_truncates_fee() {
        // 140 bp of 999 lamports = 13.986 → 13
        let Ok(split) = FeeSchedule::protocol().split(Amount::new(999)) else {
            panic!("expected Ok");
        };
        assert_eq!(split.taker_fee(), Amount::new(13));
    }

    #[test]
    fn split_zero_gross() {
        let Ok(split) = FeeSchedule::protocol().split(Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(split.taker_fee(), Amount::ZERO);
        assert_eq!(split.maker_rebate(), Amount::ZERO);
        assert_eq!(split.protocol_fee(), Amount::ZERO);
    }

    // -- split: sniping path ------------------------------------------------

    #[test]
    fn snipe_fee_uses_rate_when_above_floor() {
        // 150 bp of 100 SOL = 1.5 SOL, far above the 0.01 SOL floor.
        let schedule = FeeSchedule::protocol().with_sniping(true);
        let Ok(split) = schedule.split(Amount::new(100 * SOL)) else {
            panic!("expected Ok");
        };
        assert_eq!(split.taker_fee(), Amount::new(1_500_000_000));
    }

    #[test]
    fn snipe_fee_hits_floor_on_cheap_items() {
        // 150 bp of 0.1 SOL = 1_500_000, below the 10_000_000 floor.
        let schedule = FeeSchedule::protocol().with_sniping(true);
        let Ok(split) = schedule.split(Amount::new(SOL / 10)) else {
            panic!("expected Ok");
        };
        assert_eq!(split.taker_fee(), Amount::new(SNIPE_MIN_FEE));
    }

    #[test]
    fn snipe_rebate_never_exceeds_snipe_fee() {
        // A custom rebate above the snipe rate gets clamped, keeping the
        // remainder non-negative.
        let Ok(schedule) = FeeSchedule::new(BasisPoints::new(9_000), BasisPoints::new(9_000))
        else {
            panic!("expected Ok");
        };
        let schedule = schedule.with_sniping(true);
        let Ok(split) = schedule.split(Amount::new(100 * SOL)) else {
            panic!("expected Ok");
        };
        assert_eq!(split.maker_rebate(), split.taker_fee());
        assert_eq!(split.protocol_fee(), Amount::ZERO);
    }

    // -- FeeSplit invariant ---------------------------------------------------

    #[test]
    fn mismatched_components_rejected() {
        let result = FeeSplit::new(
            Amount::new(100),
            Amount::new(10),
            Amount::new(10),
            Amount::new(10),
        );
        assert!(result.is_err());
    }

    #[test]
    fn copy_semantics() {
        let Ok(split) = FeeSplit::new(
            Amount::new(30),
            Amount::new(10),
            Amount::new(10),
            Amount::new(10),
        ) else {
            panic!("expected Ok");
        };
        let other = split;
        assert_eq!(split, other);
    }
}
