//! Pool configuration types.
//!
//! This module contains the [`PoolConfig`] blueprint — the immutable,
//! validated slice of an on-ledger pool account that pricing runs against —
//! and the [`PoolKind`] enum encoding which taker sides a pool trades.

mod pool_config;

pub use pool_config::{PoolConfig, PoolKind};
