//! Maker-side solve target specification.

use core::fmt;

use super::Amount;

/// What the maker solver is solving for: a fixed item count or a currency
/// budget.
///
/// Shaped like a swap spec: the variant names the constraint, the payload
/// carries it.
///
/// # Examples
///
/// ```
/// use tidepool_amm::domain::{Amount, MakerSpec};
///
/// let by_count = MakerSpec::exact_count(3);
/// let by_budget = MakerSpec::budget(Amount::new(5_000_000_000));
/// assert!(by_count.is_exact_count());
/// assert!(by_budget.is_budget());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MakerSpec {
    /// Solve for exactly `count` sequential trades.
    ExactCount {
        /// The desired number of trades.
        count: u32,
    },
    /// Solve for as many sequential trades as `total` can pay for.
    Budget {
        /// The currency budget, in lamports.
        total: Amount,
    },
}

impl MakerSpec {
    /// Creates a count-constrained spec.
    pub const fn exact_count(count: u32) -> Self {
        Self::ExactCount { count }
    }

    /// Creates a budget-constrained spec.
    pub const fn budget(total: Amount) -> Self {
        Self::Budget { total }
    }

    /// Returns `true` if this is a count constraint.
    #[must_use]
    pub const fn is_exact_count(&self) -> bool {
        matches!(self, Self::ExactCount { .. })
    }

    /// Returns `true` if this is a budget constraint.
    #[must_use]
    pub const fn is_budget(&self) -> bool {
        matches!(self, Self::Budget { .. })
    }
}

impl fmt::Display for MakerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactCount { count } => write!(f, "ExactCount({count})"),
            Self::Budget { total } => write!(f, "Budget({total})"),
        }
    }
}
