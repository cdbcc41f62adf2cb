//! Single-trade quoting walkthrough.
//!
//! Demonstrates pricing taker buys and sells against the three pool types,
//! the trade-pool spread, and the protocol fee split on a quoted price.
//!
//! # Run
//!
//! ```bash
//! cargo run --example taker_quote
//! ```

use tidepool_amm::config::{PoolConfig, PoolKind};
use tidepool_amm::curve::Curve;
use tidepool_amm::domain::{Amount, BasisPoints, TakerSide, TradeContext};
use tidepool_amm::pricing::FeeSchedule;

fn sol(lamports: u64) -> f64 {
    lamports as f64 / 1e9
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Taker quotes against an NFT collection pool ===\n");

    // ── 1. A trade pool: linear curve, 2 SOL start, 0.1 SOL step ───────
    let pool = PoolConfig::new(
        PoolKind::Trade {
            mm_fee: BasisPoints::new(250),
            compound_fees: false,
        },
        Curve::linear(Amount::new(100_000_000)),
        Amount::new(2_000_000_000),
    )?;
    println!("Pool: {} on {}", pool.kind(), pool.curve());
    println!("Starting price: {} SOL\n", sol(pool.starting_price().get()));

    // ── 2. Quote both sides at a fresh counter snapshot ─────────────────
    let buy = TradeContext::new(TakerSide::Buy);
    let sell = TradeContext::new(TakerSide::Sell);

    if let Some(price) = pool.taker_price(&buy) {
        println!("Next taker buy:  {:.4} SOL", sol(price.get()));
    }
    if let Some(price) = pool.taker_price(&sell) {
        println!("Next taker sell: {:.4} SOL  (one tick down, less mm fee)", sol(price.get()));
    }

    // ── 3. Walk the buy side: each purchase raises the next price ───────
    println!("\nBuy ladder:");
    for buys in 0..4u32 {
        let ctx = TradeContext::new(TakerSide::Buy).with_counts(buys, 0);
        if let Some(price) = pool.taker_price(&ctx) {
            println!("  after {buys} buys → {:.4} SOL", sol(price.get()));
        }
    }

    // ── 4. Split the protocol fee on a quoted price ─────────────────────
    let price = pool.taker_price(&buy).expect("pool quotes buys");
    let split = FeeSchedule::protocol().split(price)?;
    println!("\nFee split on a {:.4} SOL buy:", sol(price.get()));
    println!("  taker fee:    {:.6} SOL", sol(split.taker_fee().get()));
    println!("  maker rebate: {:.6} SOL", sol(split.maker_rebate().get()));
    println!("  protocol:     {:.6} SOL", sol(split.protocol_fee().get()));

    // ── 5. Side gating: an NFT pool quotes no sells ─────────────────────
    let nft_pool = PoolConfig::new(
        PoolKind::Nft,
        Curve::linear(Amount::new(100_000_000)),
        Amount::new(2_000_000_000),
    )?;
    println!(
        "\nNFT pool sell quote: {:?}  (NFT pools are buy-only)",
        nft_pool.taker_price(&sell)
    );

    Ok(())
}
