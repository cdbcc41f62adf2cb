//! The pricing engine: single-trade quotes, fee splitting, and the
//! maker-side amount/count solver.
//!
//! Quote entry points are methods on [`PoolConfig`](crate::config::PoolConfig):
//!
//! - [`taker_price`](crate::config::PoolConfig::taker_price) — the
//!   settlement-exact price of the next single trade, or `None` when no
//!   legal trade exists.
//! - [`taker_display_price`](crate::config::PoolConfig::taker_display_price)
//!   — the same value nudged by a slippage tolerance, for display only.
//! - [`maker_amount_count`](crate::config::PoolConfig::maker_amount_count)
//!   — how many sequential trades a count or budget target allows.
//!
//! Fee accounting is separate: [`FeeSchedule::split`] decomposes any gross
//! price into protocol, maker-rebate, and broker components.

mod fee_split;
mod maker_solver;
mod taker_price;

#[cfg(test)]
mod proptest_properties;

pub use fee_split::{FeeSchedule, FeeSplit};
