//! Unified error types for the Tidepool AMM core.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//!
//! # Errors vs. no-quote
//!
//! `AmmError` is reserved for **caller-contract violations**: a malformed
//! configuration or fee schedule indicates a bug in the collaborator that
//! supplied it, and is raised immediately at construction time.
//!
//! Market conditions — wrong taker side for the pool type, an exhausted
//! sell cap, a curve step that would push the price below zero — are *not*
//! errors. Quote paths signal them with `None` and never fail, mirroring
//! how the settlement program rejects (rather than panics on) such trades.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Unified error enum for every fallible operation in the crate.
///
/// Variants carry a `&'static str` describing the exact site of the
/// violation, in the spirit of settlement-program error codes: cheap to
/// construct, `Copy`, and meaningful in logs without a backtrace.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmmError {
    /// An intermediate value exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would have produced a negative amount.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// The pool configuration violates a structural invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A fee parameter is outside its legal range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A quantity parameter is outside its legal range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),
}
