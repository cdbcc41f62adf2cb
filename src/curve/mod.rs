//! Bonding-curve shapes and the dispatch enum that evaluates them.
//!
//! A pool's curve maps a trade index to a price. Two shapes exist:
//!
//! | Shape | Step | Up | Down |
//! |-------|------|----|------|
//! | [`Curve::Linear`] | absolute lamports | `start + delta·i` | `start − delta·i` |
//! | [`Curve::Exponential`] | basis-point rate | `×(1+r)` per tick | `÷(1+r)` per tick |
//!
//! Curves are dispatched via the [`Curve`] enum (not `dyn` trait objects):
//! there are exactly two shapes, both `Copy`, and static dispatch keeps
//! evaluation allocation-free.
//!
//! All evaluation is checked integer arithmetic. `None` means "the
//! settlement program would abort or reject on this step" — overflow on
//! the way up, or a linear step past zero on the way down. Zero itself is
//! a legal price.

mod exponential;
mod linear;

use core::fmt;

use crate::constants::MAX_DELTA_BPS;
use crate::domain::{Amount, BasisPoints};
use crate::error::AmmError;

/// Which way a trade walks the curve.
///
/// Taker buys walk [`Up`](Direction::Up) (each purchase raises the next
/// price), taker sells walk [`Down`](Direction::Down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards higher prices.
    Up,
    /// Towards lower prices.
    Down,
}

impl Direction {
    /// Returns `true` if this is [`Direction::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Direction::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

/// A bonding-curve shape together with its step size.
///
/// The step's meaning is carried by the variant — lamports for
/// [`Linear`](Self::Linear), a basis-point rate for
/// [`Exponential`](Self::Exponential) — so "is `delta` an amount or a
/// rate?" is never a question the type system leaves open.
///
/// # Examples
///
/// ```
/// use tidepool_amm::curve::{Curve, Direction};
/// use tidepool_amm::domain::{Amount, BasisPoints};
///
/// let curve = Curve::linear(Amount::new(100_000_000));
/// let price = curve.price_at(Amount::new(2_000_000_000), Direction::Up, 1);
/// assert_eq!(price, Some(Amount::new(2_100_000_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Curve {
    /// Price moves by a fixed lamport amount per tick.
    Linear {
        /// The lamport step. Zero degenerates to a flat curve.
        delta: Amount,
    },
    /// Price compounds by a basis-point rate per tick.
    Exponential {
        /// The per-tick rate. Zero degenerates to a flat curve.
        rate: BasisPoints,
    },
}

impl Curve {
    /// Creates a linear curve with the given lamport step.
    ///
    /// Any step is legal, including zero (a flat curve).
    pub const fn linear(delta: Amount) -> Self {
        Self::Linear { delta }
    }

    /// Creates an exponential curve with the given per-tick rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `rate` exceeds
    /// [`MAX_DELTA_BPS`] — the settlement program rejects such pools at
    /// creation.
    pub const fn exponential(rate: BasisPoints) -> crate::error::Result<Self> {
        if rate.get() > MAX_DELTA_BPS {
            return Err(AmmError::InvalidConfiguration(
                "exponential rate at or above 100%",
            ));
        }
        Ok(Self::Exponential { rate })
    }

    /// Returns `true` if every index prices at the starting price.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        match self {
            Self::Linear { delta } => delta.is_zero(),
            Self::Exponential { rate } => rate.is_zero(),
        }
    }

    /// Evaluates the price `times` ticks away from `start` in the given
    /// direction.
    ///
    /// Returns `None` when the settlement program would abort or reject
    /// the same computation: `u64` overflow, or a linear down-step past
    /// zero. See the shape modules for the per-tick arithmetic.
    #[must_use]
    pub fn price_at(&self, start: Amount, direction: Direction, times: u32) -> Option<Amount> {
        match self {
            Self::Linear { delta } => linear::shift(start, *delta, direction, times),
            Self::Exponential { rate } => exponential::shift(start, *rate, direction, times),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear { delta } => write!(f, "Linear(delta={delta})"),
            Self::Exponential { rate } => write!(f, "Exponential(rate={rate})"),
        }
    }
}
