//! # Tidepool AMM
//!
//! Bonding-curve pricing and liquidity-accounting core for NFT collection
//! pools.
//!
//! Liquidity providers deposit NFTs and/or currency into pools; takers buy
//! NFTs from, or sell NFTs into, those pools at prices that move
//! deterministically with trade volume along a configurable bonding curve.
//! This crate is the client-side pricing engine for that market: it
//! computes, in exact integer arithmetic, the price of the next trade, the
//! fee decomposition on that price, and how many sequential trades a count
//! or budget target allows.
//!
//! The on-chain settlement program recomputes every quote at execution and
//! aborts on divergence, so this crate's arithmetic mirrors settlement's
//! step by step: same 64-bit widths, same truncating divisions, same
//! per-tick evaluation order. A quote that cannot settle — wrong side for
//! the pool type, sell cap exhausted, a curve step past zero or past
//! `u64` — is `None`, never an error and never a panic.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` derives on public value types |
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tidepool-amm = "0.1"
//! ```
//!
//! ## Quote a trade and split its fees
//!
//! ```rust
//! use tidepool_amm::config::{PoolConfig, PoolKind};
//! use tidepool_amm::curve::Curve;
//! use tidepool_amm::domain::{Amount, BasisPoints, TakerSide, TradeContext};
//! use tidepool_amm::pricing::FeeSchedule;
//!
//! // 1. A trade pool: linear curve, 2 SOL start, 0.1 SOL step, 2.5% mm fee.
//! let pool = PoolConfig::new(
//!     PoolKind::Trade {
//!         mm_fee: BasisPoints::new(250),
//!         compound_fees: false,
//!     },
//!     Curve::linear(Amount::new(100_000_000)),
//!     Amount::new(2_000_000_000),
//! )
//! .expect("valid config");
//!
//! // 2. Price the next taker sell from the pool's counter snapshot.
//! let ctx = TradeContext::new(TakerSide::Sell);
//! let price = pool.taker_price(&ctx).expect("pool quotes sells");
//! assert_eq!(price, Amount::new(1_852_500_000));
//!
//! // 3. Split the protocol fee on that price.
//! let split = FeeSchedule::protocol().split(price).expect("valid schedule");
//! assert_eq!(split.taker_fee(), Amount::new(25_935_000));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │     Consumer      │  transaction-assembly layer: ledger reads in,
//! └─────────┬────────┘  price guards out
//!           │ PoolConfig + TradeContext
//!           ▼
//! ┌──────────────────┐
//! │     Pricing       │  taker_price / taker_display_price /
//! └─────────┬────────┘  maker_amount_count / FeeSchedule::split
//!           │ Curve::price_at
//!           ▼
//! ┌──────────────────┐
//! │      Curve        │  Linear, Exponential — per-tick checked steps
//! └─────────┬────────┘
//!           │
//!           ▼
//! ┌──────────────────┐
//! │     Domain        │  Amount, BasisPoints, TradeContext, AmountCount, …
//! └──────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`BasisPoints`](domain::BasisPoints), [`TradeContext`](domain::TradeContext), [`AmountCount`](domain::AmountCount) |
//! | [`config`] | Validated pool blueprint: [`PoolConfig`](config::PoolConfig), [`PoolKind`](config::PoolKind) |
//! | [`curve`]  | Curve shapes and evaluation: [`Curve`](curve::Curve), [`Direction`](curve::Direction) |
//! | [`pricing`] | Quote engine, maker solver, and [`FeeSchedule`](pricing::FeeSchedule) |
//! | [`constants`] | Mirrored settlement constants, single source of truth |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

// Module declarations (always compiled)
pub mod config;
pub mod constants;
pub mod curve;
pub mod domain;
pub mod error;
pub mod prelude;
pub mod pricing;
