//! Convenience re-exports for common types.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use tidepool_amm::prelude::*;
//! ```
//!
//! This re-exports the most frequently used domain types, the pool
//! configuration, curve types, the fee schedule, and error types so that
//! consumers don't need to import from individual submodules.

// Re-export domain types
pub use crate::domain::{
    Amount, AmountCount, BasisPoints, MakerSpec, TakerSide, TradeContext,
};

// Re-export configuration
pub use crate::config::{PoolConfig, PoolKind};

// Re-export curve types
pub use crate::curve::{Curve, Direction};

// Re-export fee accounting
pub use crate::pricing::{FeeSchedule, FeeSplit};

// Re-export error types
pub use crate::error::{AmmError, Result};
