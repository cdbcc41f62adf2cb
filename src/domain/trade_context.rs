//! Caller-supplied trade counter snapshot.

use super::{BasisPoints, TakerSide};

/// Snapshot of the counters a quote is priced against.
///
/// The pricing core holds no state of its own: every call receives the
/// counters the caller read from ledger state, bundled in a `TradeContext`.
/// Staleness is the caller's concern — the settlement program performs the
/// authoritative recomputation at execution time.
///
/// Constructed with [`new`](Self::new) and refined with `with_*`
/// combinators; every field defaults to zero/off.
///
/// # Examples
///
/// ```
/// use tidepool_amm::domain::{TakerSide, TradeContext};
///
/// let ctx = TradeContext::new(TakerSide::Sell)
///     .with_counts(0, 3)
///     .with_stats(1, 4)
///     .with_sell_cap(10);
/// assert_eq!(ctx.taker_sell_count(), 3);
/// assert_eq!(ctx.net_outstanding_sells(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeContext {
    taker_side: TakerSide,
    taker_buy_count: u32,
    taker_sell_count: u32,
    extra_selected: u32,
    max_taker_sell_count: u32,
    stats_taker_buy_count: u32,
    stats_taker_sell_count: u32,
    marginated: bool,
    slippage: Option<BasisPoints>,
}

impl TradeContext {
    /// Creates a context for the given side with all counters at zero.
    pub const fn new(taker_side: TakerSide) -> Self {
        Self {
            taker_side,
            taker_buy_count: 0,
            taker_sell_count: 0,
            extra_selected: 0,
            max_taker_sell_count: 0,
            stats_taker_buy_count: 0,
            stats_taker_sell_count: 0,
            marginated: false,
            slippage: None,
        }
    }

    /// Sets the taker's own running buy/sell counts.
    pub const fn with_counts(mut self, buys: u32, sells: u32) -> Self {
        self.taker_buy_count = buys;
        self.taker_sell_count = sells;
        self
    }

    /// Sets the pool-lifetime buy/sell counters backing the sell cap.
    pub const fn with_stats(mut self, buys: u32, sells: u32) -> Self {
        self.stats_taker_buy_count = buys;
        self.stats_taker_sell_count = sells;
        self
    }

    /// Sets the offset for items already priced inside the same atomic
    /// multi-item order.
    pub const fn with_extra_selected(mut self, extra: u32) -> Self {
        self.extra_selected = extra;
        self
    }

    /// Sets the pool-level sell cap. Zero means unlimited.
    pub const fn with_sell_cap(mut self, cap: u32) -> Self {
        self.max_taker_sell_count = cap;
        self
    }

    /// Marks the pool as backed by a shared margin account.
    pub const fn with_marginated(mut self, marginated: bool) -> Self {
        self.marginated = marginated;
        self
    }

    /// Supplies an explicit display-slippage tolerance.
    pub const fn with_slippage(mut self, slippage: BasisPoints) -> Self {
        self.slippage = Some(slippage);
        self
    }

    /// Returns the taker side.
    #[must_use]
    pub const fn taker_side(&self) -> TakerSide {
        self.taker_side
    }

    /// Returns the taker's own running buy count.
    #[must_use]
    pub const fn taker_buy_count(&self) -> u32 {
        self.taker_buy_count
    }

    /// Returns the taker's own running sell count.
    #[must_use]
    pub const fn taker_sell_count(&self) -> u32 {
        self.taker_sell_count
    }

    /// Returns the same-order item offset.
    #[must_use]
    pub const fn extra_selected(&self) -> u32 {
        self.extra_selected
    }

    /// Returns the pool-level sell cap (zero = unlimited).
    #[must_use]
    pub const fn max_taker_sell_count(&self) -> u32 {
        self.max_taker_sell_count
    }

    /// Returns the pool-lifetime buy counter.
    #[must_use]
    pub const fn stats_taker_buy_count(&self) -> u32 {
        self.stats_taker_buy_count
    }

    /// Returns the pool-lifetime sell counter.
    #[must_use]
    pub const fn stats_taker_sell_count(&self) -> u32 {
        self.stats_taker_sell_count
    }

    /// Returns `true` if the pool is backed by a shared margin account.
    #[must_use]
    pub const fn is_marginated(&self) -> bool {
        self.marginated
    }

    /// Returns the explicit display-slippage tolerance, if any.
    #[must_use]
    pub const fn slippage(&self) -> Option<BasisPoints> {
        self.slippage
    }

    /// The curve index for the next trade on this context's side:
    /// own-side count plus the same-order offset.
    ///
    /// Returns `None` if the sum does not fit a `u32`.
    #[must_use]
    pub const fn curve_index(&self) -> Option<u32> {
        let own = match self.taker_side {
            TakerSide::Buy => self.taker_buy_count,
            TakerSide::Sell => self.taker_sell_count,
        };
        own.checked_add(self.extra_selected)
    }

    /// Net sells the pool is currently holding: lifetime sells minus
    /// lifetime buys, floored at zero.
    ///
    /// Buys net against sells, so a pool that bought items back resumes
    /// accepting sells below the cap.
    #[must_use]
    pub const fn net_outstanding_sells(&self) -> u32 {
        self.stats_taker_sell_count
            .saturating_sub(self.stats_taker_buy_count)
    }

    /// Returns a copy with the own-side counter and its matching
    /// pool-lifetime counter advanced by `steps` trades.
    ///
    /// The maker solver uses this to walk the curve: advancing the stats
    /// counter alongside keeps the sell cap binding mid-walk.
    pub const fn advanced_by(&self, steps: u32) -> Self {
        let mut next = *self;
        match self.taker_side {
            TakerSide::Buy => {
                next.taker_buy_count = self.taker_buy_count.saturating_add(steps);
                next.stats_taker_buy_count = self.stats_taker_buy_count.saturating_add(steps);
            }
            TakerSide::Sell => {
                next.taker_sell_count = self.taker_sell_count.saturating_add(steps);
                next.stats_taker_sell_count = self.stats_taker_sell_count.saturating_add(steps);
            }
        }
        next
    }
}
