//! Property-based tests using `proptest` for pricing invariant validation.
//!
//! Covers the engine's order-independent guarantees:
//!
//! 1. **Buy monotonicity** — the buy curve never quotes a lower price at a
//!    higher index, for either shape.
//! 2. **Spread invariant** — a trade pool with a non-zero step always
//!    quotes its first sell strictly below its first buy.
//! 3. **Degenerate curve** — a zero step quotes the starting price at
//!    every index.
//! 4. **Solver/engine consistency** — a one-item solve returns exactly
//!    the direct quote.
//! 5. **Budget monotonicity** — a larger budget never allows fewer items.
//! 6. **Boundary snap** — a budget exactly at a cumulative total allows
//!    exactly those items; one lamport less allows one fewer.

use proptest::prelude::*;

use crate::config::{PoolConfig, PoolKind};
use crate::constants::DEFAULT_MAX_COUNT_WHEN_INFINITE;
use crate::curve::Curve;
use crate::domain::{Amount, BasisPoints, MakerSpec, TakerSide, TradeContext};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn nft_pool(curve: Curve, start: u64) -> PoolConfig {
    let Ok(pool) = PoolConfig::new(PoolKind::Nft, curve, Amount::new(start)) else {
        panic!("valid NFT config");
    };
    pool
}

fn trade_pool(curve: Curve, start: u64, mm_bps: u32) -> PoolConfig {
    let Ok(pool) = PoolConfig::new(
        PoolKind::Trade {
            mm_fee: BasisPoints::new(mm_bps),
            compound_fees: false,
        },
        curve,
        Amount::new(start),
    ) else {
        panic!("valid trade config");
    };
    pool
}

fn exponential(rate_bps: u32) -> Curve {
    let Ok(curve) = Curve::exponential(BasisPoints::new(rate_bps)) else {
        panic!("valid exponential curve");
    };
    curve
}

fn buy_at(pool: &PoolConfig, index: u32) -> Option<Amount> {
    pool.taker_price(&TradeContext::new(TakerSide::Buy).with_counts(index, 0))
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Starting prices from dust to 100 SOL, avoiding the overflow frontier.
fn start_strategy() -> impl Strategy<Value = u64> {
    1u64..=100_000_000_000u64
}

/// Linear steps up to 1 SOL.
fn delta_strategy() -> impl Strategy<Value = u64> {
    0u64..=1_000_000_000u64
}

/// Exponential rates across the legal range.
fn rate_strategy() -> impl Strategy<Value = u32> {
    0u32..=9_999u32
}

/// Trade indexes deep enough to exercise compounding.
fn index_strategy() -> impl Strategy<Value = u32> {
    0u32..=64u32
}

// ---------------------------------------------------------------------------
// Property 1: Buy monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_buy_monotone_linear(
        start in start_strategy(),
        delta in delta_strategy(),
        index in index_strategy(),
    ) {
        let pool = nft_pool(Curve::linear(Amount::new(delta)), start);
        if let (Some(at_index), Some(at_next)) = (buy_at(&pool, index), buy_at(&pool, index + 1)) {
            prop_assert!(at_next >= at_index);
        }
    }

    #[test]
    fn prop_buy_monotone_exponential(
        start in start_strategy(),
        rate in rate_strategy(),
        index in index_strategy(),
    ) {
        let pool = nft_pool(exponential(rate), start);
        if let (Some(at_index), Some(at_next)) = (buy_at(&pool, index), buy_at(&pool, index + 1)) {
            prop_assert!(at_next >= at_index);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Trade-pool spread
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_spread_linear(
        start in start_strategy(),
        delta in 1u64..=1_000_000_000u64,
        mm_bps in 0u32..=9_999u32,
    ) {
        // Keep the first sell above zero so both quotes exist.
        prop_assume!(start > delta);
        let pool = trade_pool(Curve::linear(Amount::new(delta)), start, mm_bps);
        let buy = pool.taker_price(&TradeContext::new(TakerSide::Buy));
        let sell = pool.taker_price(&TradeContext::new(TakerSide::Sell));
        if let (Some(buy), Some(sell)) = (buy, sell) {
            prop_assert!(sell < buy);
        }
    }

    #[test]
    fn prop_spread_exponential(
        start in 10_000u64..=100_000_000_000u64,
        rate in 1u32..=9_999u32,
        mm_bps in 0u32..=9_999u32,
    ) {
        let pool = trade_pool(exponential(rate), start, mm_bps);
        let buy = pool.taker_price(&TradeContext::new(TakerSide::Buy));
        let sell = pool.taker_price(&TradeContext::new(TakerSide::Sell));
        if let (Some(buy), Some(sell)) = (buy, sell) {
            prop_assert!(sell < buy);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Degenerate (flat) curves
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_flat_linear_quotes_start_everywhere(
        start in start_strategy(),
        index in 0u32..=1_000u32,
    ) {
        let pool = nft_pool(Curve::linear(Amount::ZERO), start);
        prop_assert_eq!(buy_at(&pool, index), Some(Amount::new(start)));
    }

    #[test]
    fn prop_flat_exponential_quotes_start_everywhere(
        start in start_strategy(),
        index in 0u32..=1_000u32,
    ) {
        let pool = nft_pool(exponential(0), start);
        prop_assert_eq!(buy_at(&pool, index), Some(Amount::new(start)));
    }
}

// ---------------------------------------------------------------------------
// Property 4: Solver/engine consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_single_item_solve_matches_quote(
        start in start_strategy(),
        delta in delta_strategy(),
        buys in 0u32..=32u32,
    ) {
        let pool = nft_pool(Curve::linear(Amount::new(delta)), start);
        let ctx = TradeContext::new(TakerSide::Buy).with_counts(buys, 0);
        let result = pool.maker_amount_count(
            &ctx,
            MakerSpec::exact_count(1),
            DEFAULT_MAX_COUNT_WHEN_INFINITE,
        );
        match pool.taker_price(&ctx) {
            Some(price) => {
                prop_assert_eq!(result.allowed_count(), 1);
                prop_assert_eq!(result.initial_price(), Some(price));
                prop_assert_eq!(result.total_amount(), price);
            }
            None => prop_assert!(result.is_empty()),
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Budget monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_bigger_budget_never_fewer_items(
        start in start_strategy(),
        delta in delta_strategy(),
        budget in 0u64..=1_000_000_000_000u64,
        extra in 0u64..=1_000_000_000_000u64,
    ) {
        let pool = nft_pool(Curve::linear(Amount::new(delta)), start);
        let ctx = TradeContext::new(TakerSide::Buy);
        let small = pool.maker_amount_count(
            &ctx,
            MakerSpec::budget(Amount::new(budget)),
            DEFAULT_MAX_COUNT_WHEN_INFINITE,
        );
        let large = pool.maker_amount_count(
            &ctx,
            MakerSpec::budget(Amount::new(budget.saturating_add(extra))),
            DEFAULT_MAX_COUNT_WHEN_INFINITE,
        );
        prop_assert!(large.allowed_count() >= small.allowed_count());
    }
}

// ---------------------------------------------------------------------------
// Property 6: Boundary snap
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_budget_boundary_snap(
        start in 1u64..=10_000_000_000u64,
        delta in delta_strategy(),
        count in 1u32..=16u32,
    ) {
        let pool = nft_pool(Curve::linear(Amount::new(delta)), start);
        let ctx = TradeContext::new(TakerSide::Buy);
        // Exact cumulative total for `count` items via the count solver.
        let exact = pool.maker_amount_count(
            &ctx,
            MakerSpec::exact_count(count),
            DEFAULT_MAX_COUNT_WHEN_INFINITE,
        );
        prop_assume!(exact.allowed_count() == count);
        let total = exact.total_amount();
        prop_assume!(!total.is_zero());

        let at_total = pool.maker_amount_count(
            &ctx,
            MakerSpec::budget(total),
            DEFAULT_MAX_COUNT_WHEN_INFINITE,
        );
        prop_assert!(at_total.allowed_count() >= count);
        prop_assert!(at_total.total_amount() >= total);

        let below = Amount::new(total.get() - 1);
        let at_below = pool.maker_amount_count(
            &ctx,
            MakerSpec::budget(below),
            DEFAULT_MAX_COUNT_WHEN_INFINITE,
        );
        prop_assert_eq!(at_below.allowed_count(), count - 1);
    }
}
