//! Fundamental domain value types used throughout the pricing core.
//!
//! This module contains the core value types that model the domain:
//! lamport amounts, basis-point rates, taker sides, trade counter
//! snapshots, and the maker solver's input/output pair. All types use
//! newtypes or tagged enums with validated constructors to enforce
//! invariants.

mod amount;
mod amount_count;
mod basis_points;
mod maker_spec;
mod side;
mod trade_context;

pub use amount::Amount;
pub use amount_count::AmountCount;
pub use basis_points::BasisPoints;
pub use maker_spec::MakerSpec;
pub use side::TakerSide;
pub use trade_context::TradeContext;
