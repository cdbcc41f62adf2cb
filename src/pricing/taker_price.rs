//! Pricing the next single taker trade against a pool.

use tracing::trace;

use crate::config::PoolConfig;
use crate::constants::DEFAULT_MARGIN_SLIPPAGE_BPS;
use crate::curve::Direction;
use crate::domain::{Amount, BasisPoints, TakerSide, TradeContext};

impl PoolConfig {
    /// Prices the next single trade for the context's taker side.
    ///
    /// This is the settlement-exact quote: the value a transaction's
    /// price guard is built from. `None` means no legal trade exists —
    /// the pool does not trade that side, the sell cap is exhausted, or
    /// the curve step would go negative or overflow — and the caller
    /// must not submit.
    ///
    /// The quote pipeline:
    ///
    /// 1. Side gate: NFT pools quote no sells, token pools no buys.
    /// 2. Sell-cap gate: with a cap set, the pool stops quoting sells
    ///    once lifetime sells minus lifetime buys reaches it.
    /// 3. Index: the taker's own-side count plus the same-order offset.
    ///    Buys walk up at the index; sells walk down — one tick further
    ///    on trade pools, which is where the bid/ask spread comes from.
    /// 4. Trade-pool sells pay the market-maker fee out of the evaluated
    ///    price; every other taker fee is split downstream from the
    ///    value returned here.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool_amm::config::{PoolConfig, PoolKind};
    /// use tidepool_amm::curve::Curve;
    /// use tidepool_amm::domain::{Amount, TakerSide, TradeContext};
    ///
    /// let pool = PoolConfig::new(
    ///     PoolKind::Nft,
    ///     Curve::linear(Amount::new(100_000_000)),
    ///     Amount::new(2_000_000_000),
    /// )
    /// .expect("valid config");
    ///
    /// let ctx = TradeContext::new(TakerSide::Buy).with_counts(1, 0);
    /// assert_eq!(pool.taker_price(&ctx), Some(Amount::new(2_100_000_000)));
    /// ```
    #[must_use]
    pub fn taker_price(&self, ctx: &TradeContext) -> Option<Amount> {
        let side = ctx.taker_side();

        if !self.kind().supports(side) {
            trace!(kind = %self.kind(), %side, "side not traded by pool type");
            return None;
        }

        if side.is_sell()
            && ctx.max_taker_sell_count() > 0
            && ctx.net_outstanding_sells() >= ctx.max_taker_sell_count()
        {
            trace!(
                cap = ctx.max_taker_sell_count(),
                outstanding = ctx.net_outstanding_sells(),
                "sell cap exhausted"
            );
            return None;
        }

        let index = ctx.curve_index()?;
        let (direction, ticks) = match side {
            TakerSide::Buy => (Direction::Up, index),
            // Trade pools quote sells one tick below the buy curve; that
            // extra tick is the spread.
            TakerSide::Sell if self.kind().is_trade() => {
                (Direction::Down, index.checked_add(1)?)
            }
            TakerSide::Sell => (Direction::Down, index),
        };

        let gross = self
            .curve()
            .price_at(self.starting_price(), direction, ticks)?;

        if side.is_sell() {
            if let Some(mm_bps) = self.kind().mm_fee_bps() {
                let mm_fee = mm_bps.apply(gross)?;
                return gross.checked_sub(&mm_fee);
            }
        }
        Some(gross)
    }

    /// The quote shown to a user before submission: [`taker_price`]
    /// nudged in the taker-unfavorable direction by the context's
    /// slippage tolerance.
    ///
    /// The tolerance is the context's explicit `slippage` when supplied,
    /// else [`DEFAULT_MARGIN_SLIPPAGE_BPS`] for marginated pools (whose
    /// backing balance can shift between quote and execution), else
    /// nothing. Display only — a settlement guard built from this value
    /// would over- or under-pay by the nudge.
    ///
    /// [`taker_price`]: Self::taker_price
    #[must_use]
    pub fn taker_display_price(&self, ctx: &TradeContext) -> Option<Amount> {
        let price = self.taker_price(ctx)?;

        let tolerance = match ctx.slippage() {
            Some(bps) => bps,
            None if ctx.is_marginated() => BasisPoints::new(DEFAULT_MARGIN_SLIPPAGE_BPS),
            None => return Some(price),
        };

        let nudge = tolerance.apply(price)?;
        match ctx.taker_side() {
            TakerSide::Buy => price.checked_add(&nudge),
            TakerSide::Sell => price.checked_sub(&nudge),
        }
    }
}
