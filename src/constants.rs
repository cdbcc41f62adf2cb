//! Protocol constants shared by the pricing engine and its conformance tests.
//!
//! Every value here exists exactly once: the engine reads these constants and
//! the conformance suite (`tests/conformance.rs`) asserts that each one is
//! numerically identical to the constant the settlement program publishes.
//! Nothing in this crate re-states a protocol number as a second literal.

/// Basis-point denominator: 10 000 bp = 100 %.
pub const HUNDRED_PCT_BPS: u32 = 10_000;

/// Protocol taker fee, charged on the gross price of every taker trade.
pub const TAKER_FEE_BPS: u32 = 140;

/// Maker rebate, carved out of the taker fee and credited to the pool owner.
///
/// Always at most [`TAKER_FEE_BPS`]; the settlement program enforces the same
/// bound, so the split `taker_fee - maker_rebate` cannot underflow.
pub const MAKER_REBATE_BPS: u32 = 25;

/// Taker fee applied when an order snipes a listing instead of trading
/// against the live curve.
pub const SNIPE_FEE_BPS: u32 = 150;

/// Absolute floor for the snipe fee, in lamports (0.01 SOL).
///
/// Snipes on cheap items still pay at least this much; without the floor a
/// low-value snipe would round its fee down to dust.
pub const SNIPE_MIN_FEE: u64 = 10_000_000;

/// Upper bound for the exponential curve rate, exclusive of 100 %.
///
/// A rate of 10 000 bp would double the price every tick on the way up and
/// pin it at zero on the way down after a single tick; the settlement
/// program rejects such pools at creation.
pub const MAX_DELTA_BPS: u32 = 9_999;

/// Upper bound for a trade pool's market-maker fee.
pub const MAX_MM_FEE_BPS: u32 = 9_999;

/// Default display-slippage tolerance for pools backed by a shared margin
/// account, applied when the caller supplies no explicit tolerance.
pub const DEFAULT_MARGIN_SLIPPAGE_BPS: u32 = 100;

/// Default iteration bound for the maker solver.
///
/// Flat and asymptotically-decaying curves never terminate the solver walk
/// on their own; this bound keeps every call O(bound).
pub const DEFAULT_MAX_COUNT_WHEN_INFINITE: u32 = 1_000;
