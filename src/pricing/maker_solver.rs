//! Solving how many sequential trades a maker target allows.

use tracing::trace;

use crate::config::PoolConfig;
use crate::domain::{Amount, AmountCount, MakerSpec, TradeContext};

impl PoolConfig {
    /// Walks the curve from the context's counters and answers: how many
    /// sequential same-side trades can execute, at what total cost, and
    /// what the first one costs.
    ///
    /// Each step re-quotes via [`taker_price`](Self::taker_price) with the
    /// own-side counter *and* its pool-lifetime stats counter advanced, so
    /// everything the single-trade engine enforces — side gating, the sell
    /// cap, negative-price rejection, settlement overflow — bounds the walk
    /// exactly as it would bound the real trade sequence.
    ///
    /// Termination:
    ///
    /// - the first `None` quote (a count request past the sell cap
    ///   truncates to the cap rather than failing);
    /// - for [`MakerSpec::ExactCount`], reaching the requested count;
    /// - for [`MakerSpec::Budget`], the first price that would push the
    ///   running total past the budget — peeked and *not* counted, so a
    ///   budget one lamport short of a boundary rounds down, never up;
    /// - `max_count_when_infinite` in either mode: flat and
    ///   asymptotically-decaying curves terminate neither by rejection nor
    ///   by budget, and every call must complete in O(bound) steps.
    ///   [`DEFAULT_MAX_COUNT_WHEN_INFINITE`] is the conventional bound.
    ///
    /// [`DEFAULT_MAX_COUNT_WHEN_INFINITE`]: crate::constants::DEFAULT_MAX_COUNT_WHEN_INFINITE
    ///
    /// # Examples
    ///
    /// ```
    /// use tidepool_amm::config::{PoolConfig, PoolKind};
    /// use tidepool_amm::constants::DEFAULT_MAX_COUNT_WHEN_INFINITE;
    /// use tidepool_amm::curve::Curve;
    /// use tidepool_amm::domain::{Amount, MakerSpec, TakerSide, TradeContext};
    ///
    /// let pool = PoolConfig::new(
    ///     PoolKind::Nft,
    ///     Curve::linear(Amount::new(100_000_000)),
    ///     Amount::new(2_000_000_000),
    /// )
    /// .expect("valid config");
    ///
    /// let result = pool.maker_amount_count(
    ///     &TradeContext::new(TakerSide::Buy),
    ///     MakerSpec::exact_count(2),
    ///     DEFAULT_MAX_COUNT_WHEN_INFINITE,
    /// );
    /// assert_eq!(result.allowed_count(), 2);
    /// assert_eq!(result.total_amount(), Amount::new(4_100_000_000));
    /// ```
    #[must_use]
    pub fn maker_amount_count(
        &self,
        ctx: &TradeContext,
        spec: MakerSpec,
        max_count_when_infinite: u32,
    ) -> AmountCount {
        let limit = match spec {
            MakerSpec::ExactCount { count } => count.min(max_count_when_infinite),
            MakerSpec::Budget { .. } => max_count_when_infinite,
        };

        let mut total = Amount::ZERO;
        let mut allowed: u32 = 0;
        let mut initial_price: Option<Amount> = None;

        while allowed < limit {
            let stepped = ctx.advanced_by(allowed);
            let Some(price) = self.taker_price(&stepped) else {
                break;
            };
            let Some(next_total) = total.checked_add(&price) else {
                // The accumulated cost no longer fits a lamport amount;
                // settlement could not move it either.
                break;
            };
            if let MakerSpec::Budget { total: budget } = spec {
                if next_total > budget {
                    break;
                }
            }
            total = next_total;
            if initial_price.is_none() {
                initial_price = Some(price);
            }
            allowed += 1;
        }

        trace!(%spec, allowed, total = %total, "maker walk complete");

        // The loop can only produce invariant-respecting triples; EMPTY is
        // an unreachable fallback, not a silent error path.
        AmountCount::new(total, allowed, initial_price).unwrap_or(AmountCount::EMPTY)
    }
}
