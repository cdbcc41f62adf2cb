//! Maker-side depth walkthrough.
//!
//! Demonstrates solving "how many items, at what total cost" for a count
//! target and for a currency budget, including sell-cap truncation and
//! the flat-zero degenerate curve.
//!
//! # Run
//!
//! ```bash
//! cargo run --example pool_depth
//! ```

use tidepool_amm::config::{PoolConfig, PoolKind};
use tidepool_amm::constants::DEFAULT_MAX_COUNT_WHEN_INFINITE;
use tidepool_amm::curve::Curve;
use tidepool_amm::domain::{Amount, BasisPoints, MakerSpec, TakerSide, TradeContext};

fn sol(lamports: u64) -> f64 {
    lamports as f64 / 1e9
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Maker depth: amount/count solving ===\n");

    // ── 1. How much must a maker escrow to buy 5 items? ─────────────────
    //    Token pool, exponential 10% decay from 1 SOL.
    let pool = PoolConfig::new(
        PoolKind::Token,
        Curve::exponential(BasisPoints::new(1_000))?,
        Amount::ONE_SOL,
    )?;
    let ctx = TradeContext::new(TakerSide::Sell);

    let result = pool.maker_amount_count(
        &ctx,
        MakerSpec::exact_count(5),
        DEFAULT_MAX_COUNT_WHEN_INFINITE,
    );
    println!("Buying 5 items into the pool:");
    println!("  allowed:   {}", result.allowed_count());
    println!("  total:     {:.6} SOL", sol(result.total_amount().get()));
    if let Some(first) = result.initial_price() {
        println!("  first at:  {:.6} SOL", sol(first.get()));
    }

    // ── 2. How many items does a 3 SOL budget absorb? ───────────────────
    let result = pool.maker_amount_count(
        &ctx,
        MakerSpec::budget(Amount::new(3_000_000_000)),
        DEFAULT_MAX_COUNT_WHEN_INFINITE,
    );
    println!("\nA 3 SOL budget absorbs {} items", result.allowed_count());
    println!("  spending {:.6} SOL", sol(result.total_amount().get()));

    // ── 3. Sell caps truncate the walk ──────────────────────────────────
    let capped = TradeContext::new(TakerSide::Sell)
        .with_sell_cap(3)
        .with_stats(0, 1);
    let result = pool.maker_amount_count(
        &capped,
        MakerSpec::exact_count(10),
        DEFAULT_MAX_COUNT_WHEN_INFINITE,
    );
    println!(
        "\nWith a cap of 3 and 1 sell outstanding, 10 requested → {} allowed",
        result.allowed_count()
    );

    // ── 4. The degenerate flat-zero curve is bounded only by the cap ────
    let free = PoolConfig::new(
        PoolKind::Token,
        Curve::exponential(BasisPoints::new(1_000))?,
        Amount::ZERO,
    )?;
    let result = free.maker_amount_count(
        &TradeContext::new(TakerSide::Sell),
        MakerSpec::budget(Amount::ZERO),
        DEFAULT_MAX_COUNT_WHEN_INFINITE,
    );
    println!(
        "\nZero-price pool, zero budget: {} items for {} lamports",
        result.allowed_count(),
        result.total_amount()
    );

    Ok(())
}
