//! Exponential curve stepping: a basis-point rate compounded per tick.

use crate::constants::HUNDRED_PCT_BPS;
use crate::domain::{Amount, BasisPoints};

use super::Direction;

/// Shifts `start` by `rate` per tick, `times` ticks in the given direction.
///
/// Each tick is one multiply and one truncating divide, in that order:
///
/// - up: `p ← p × (10_000 + rate) / 10_000`
/// - down: `p ← p × 10_000 / (10_000 + rate)`
///
/// The settlement program walks the curve tick by tick with exactly this
/// truncation, so a closed-form power — which truncates once instead of
/// `times` times — produces different low digits and therefore rejected
/// transactions. The loop here is the ground truth, not an approximation
/// of it.
///
/// The checked multiply returns `None` on `u64` overflow (settlement
/// aborts on the same tick). On the way down, truncation eventually pins
/// the price at zero; zero is legal and absorbing.
pub(crate) fn shift(
    start: Amount,
    rate: BasisPoints,
    direction: Direction,
    times: u32,
) -> Option<Amount> {
    let hundred_pct = u64::from(HUNDRED_PCT_BPS);
    let scaled = hundred_pct + u64::from(rate.get());

    let mut price = start.get();
    for _ in 0..times {
        // Zero is absorbing under both directions; the remaining ticks
        // cannot change it.
        if price == 0 {
            break;
        }
        price = match direction {
            Direction::Up => price.checked_mul(scaled)? / hundred_pct,
            Direction::Down => price.checked_mul(hundred_pct)? / scaled,
        };
    }
    Some(Amount::new(price))
}
