//! Fixed rules of the contest.
//!
//! The contest has a single rule set. Every numeric constant the dig
//! protocol depends on lives here.

use super::position::Position;

/// Merit applied per previous dig of a plot, before its treasure is read.
pub const OVERDIG_PENALTY: i64 = -10;

/// Where every player stands before their first jump.
///
/// This is one step up and to the left of the grid's origin, so a first jump
/// of `(1, 1)` lands on cell `(0, 0)`.
pub const START_POSITION: Position = Position::new(-1, -1);

/// Merit delta for digging a plot that was already dug `times_dug` times.
///
/// Zero for an untouched plot.
#[must_use]
pub fn overdig_penalty(times_dug: u32) -> i64 {
    OVERDIG_PENALTY * i64::from(times_dug)
}
