//! Linear curve stepping: a fixed lamport increment per tick.

use crate::domain::Amount;

use super::Direction;

/// Shifts `start` by `delta × times` lamports in the given direction.
///
/// All arithmetic is checked `u64`: an overflow on the way up, or a step
/// below zero on the way down, returns `None` before any underflowing
/// subtraction is attempted — the settlement program aborts on the same
/// step. Zero is a legal price; only the step *past* zero is rejected.
pub(crate) fn shift(
    start: Amount,
    delta: Amount,
    direction: Direction,
    times: u32,
) -> Option<Amount> {
    let offset = delta.checked_mul_count(times)?;
    match direction {
        Direction::Up => start.checked_add(&offset),
        Direction::Down => start.checked_sub(&offset),
    }
}
